use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let companies = [
        "Brightleaf Beverages",
        "Cascade Bottling",
        "Harvest & Vine",
        "Meridian Foods",
        "Solstice Organics",
    ];
    let categories = [
        "Biodiversity",
        "Community",
        "Emissions",
        "Energy",
        "Governance",
        "Labor Practices",
        "Packaging",
        "Sourcing",
        "Transparency",
        "Waste",
        "Water Use",
        "Worker Safety",
    ];
    let keywords = [
        "carbon footprint",
        "certification",
        "recyclable",
        "renewable",
        "supply chain",
        "wastewater",
    ];

    let mut all_company: Vec<&str> = Vec::new();
    let mut all_category: Vec<&str> = Vec::new();
    let mut all_score: Vec<f64> = Vec::new();
    let mut all_keywords: Vec<&str> = Vec::new();

    for &company in &companies {
        // Each company mentions a category 0–6 times so the per-company
        // distributions differ enough to make the charts interesting.
        for &category in &categories {
            let mentions = (rng.next_f64() * 7.0) as usize;
            for _ in 0..mentions {
                all_company.push(company);
                all_category.push(category);
                all_score.push((rng.next_u64() % 4) as f64);
                all_keywords.push(*rng.pick(&keywords));
            }
        }
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("Company", DataType::Utf8, false),
        Field::new("Category", DataType::Utf8, false),
        Field::new("Score", DataType::Float64, false),
        Field::new("Search_Keywords", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(all_company.clone())),
            Arc::new(StringArray::from(all_category)),
            Arc::new(Float64Array::from(all_score)),
            Arc::new(StringArray::from(all_keywords)),
        ],
    )
    .expect("Failed to create RecordBatch");

    let output_path = "sample_audit.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} audit records for {} companies to {output_path}",
        all_company.len(),
        companies.len()
    );
}
