use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{AuditDataset, Record};

/// Column headers the source file must provide.
pub const COL_COMPANY: &str = "Company";
pub const COL_CATEGORY: &str = "Category";
pub const COL_SCORE: &str = "Score";
pub const COL_KEYWORDS: &str = "Search_Keywords";

/// Schema-contract violations detected at load time.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an audit dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – flat Parquet file with the four required columns
/// * `.json`    – `[{ "Company": ..., "Category": ..., "Score": ..., "Search_Keywords": ... }, ...]`
/// * `.csv`     – header row naming the four required columns
///
/// A missing required column is a fatal configuration error here, never
/// deferred to the aggregation stage.
pub fn load_file(path: &Path) -> Result<AuditDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(SchemaError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<AuditDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`).
fn parse_json(text: &str) -> Result<AuditDataset> {
    let records: Vec<Record> = serde_json::from_str(text).context("parsing JSON records")?;
    Ok(AuditDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<AuditDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    parse_csv(file)
}

/// CSV layout: header row with column names; the four required columns
/// may appear in any order and extra columns are ignored.
fn parse_csv<R: Read>(input: R) -> Result<AuditDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SchemaError::MissingColumn(name).into())
    };
    let company_idx = column(COL_COMPANY)?;
    let category_idx = column(COL_CATEGORY)?;
    let score_idx = column(COL_SCORE)?;
    let keywords_idx = column(COL_KEYWORDS)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let field = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let score_text = row.get(score_idx).unwrap_or("").trim();
        let score: f64 = score_text
            .parse()
            .with_context(|| format!("CSV row {row_no}: Score '{score_text}' is not a number"))?;

        records.push(Record {
            company: field(company_idx),
            category: field(category_idx),
            score,
            keywords: field(keywords_idx),
        });
    }

    Ok(AuditDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet file with the four required columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); `Score` may be any integer or
/// float type.
fn load_parquet(path: &Path) -> Result<AuditDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &'static str| -> Result<usize> {
            schema
                .index_of(name)
                .map_err(|_| SchemaError::MissingColumn(name).into())
        };
        let company_col = batch.column(column(COL_COMPANY)?).clone();
        let category_col = batch.column(column(COL_CATEGORY)?).clone();
        let score_col = batch.column(column(COL_SCORE)?).clone();
        let keywords_col = batch.column(column(COL_KEYWORDS)?).clone();

        for row in 0..batch.num_rows() {
            let score = extract_f64(&score_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_SCORE}'"))?;

            records.push(Record {
                company: extract_string(&company_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_COMPANY}'"))?,
                category: extract_string(&category_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_CATEGORY}'"))?,
                score,
                keywords: extract_string(&keywords_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_KEYWORDS}'"))?,
            });
        }
    }

    Ok(AuditDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

/// Extract a string cell from an Arrow column at a given row.
fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("expected Utf8 column, got {other:?}"),
    }
}

/// Extract a numeric cell as `f64`; nulls read as 0.
fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        return Ok(0.0);
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as f64)
        }
        other => bail!("expected numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_with_all_columns_parses() {
        let csv = "Company,Category,Score,Search_Keywords,Extra\n\
                   Alpha,Water,2,kw1,ignored\n\
                   Beta,Waste,1.5,kw2,ignored\n";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].company, "Alpha");
        assert_eq!(ds.records[1].score, 1.5);
        assert_eq!(ds.companies, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn csv_missing_column_is_a_schema_error() {
        let csv = "Company,Category,Score\nAlpha,Water,2\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().expect("SchemaError");
        assert!(matches!(
            schema,
            SchemaError::MissingColumn(COL_KEYWORDS)
        ));
    }

    #[test]
    fn csv_bad_score_reports_row() {
        let csv = "Company,Category,Score,Search_Keywords\nAlpha,Water,high,kw1\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("Score"));
    }

    #[test]
    fn json_records_parse() {
        let json = r#"[
            {"Company": "Alpha", "Category": "Water", "Score": 2, "Search_Keywords": "kw1"},
            {"Company": "Beta", "Category": "Waste", "Score": 1.5, "Search_Keywords": "kw2"}
        ]"#;
        let ds = parse_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].score, 2.0);
    }

    #[test]
    fn json_missing_field_fails() {
        let json = r#"[{"Company": "Alpha", "Category": "Water", "Score": 2}]"#;
        assert!(parse_json(json).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("data.xlsx")).unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().expect("SchemaError");
        assert!(matches!(schema, SchemaError::UnsupportedExtension(_)));
    }
}
