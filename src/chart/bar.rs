use eframe::egui::Color32;

use crate::analytics::compute_category_percentages;
use crate::color::generate_palette;
use crate::data::model::AuditDataset;

// ---------------------------------------------------------------------------
// Clustered bar chart: category share per company
// ---------------------------------------------------------------------------

/// One category's bars across companies. Bars of the same category share
/// `color`; `values` holds (company, percentage) for the companies where
/// the category occurs.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub category: String,
    pub color: Color32,
    pub values: Vec<(String, f64)>,
}

/// Clustered bar chart specification: x = company, y = percentage,
/// bars grouped side-by-side per company.
#[derive(Debug, Clone)]
pub struct BarChartSpec {
    pub title: String,
    pub y_label: String,
    /// Cluster positions on the x-axis, sorted ascending.
    pub companies: Vec<String>,
    /// One series per category over the FULL category set of the view
    /// (unlike the radar chart this is deliberately not top-N limited).
    pub series: Vec<BarSeries>,
}

/// Build the clustered bar chart from the filtered view.
pub fn build(dataset: &AuditDataset, visible: &[usize]) -> BarChartSpec {
    let rows = compute_category_percentages(dataset, visible);

    let mut companies: Vec<String> = Vec::new();
    let mut categories: Vec<String> = Vec::new();
    for row in &rows {
        if companies.last() != Some(&row.company) {
            companies.push(row.company.clone());
        }
        if !categories.contains(&row.category) {
            categories.push(row.category.clone());
        }
    }
    categories.sort();

    let palette = generate_palette(categories.len());
    let series = categories
        .iter()
        .enumerate()
        .map(|(i, category)| BarSeries {
            category: category.clone(),
            color: palette[i],
            values: rows
                .iter()
                .filter(|r| &r.category == category)
                .map(|r| (r.company.clone(), r.percentage))
                .collect(),
        })
        .collect();

    BarChartSpec {
        title: "Category Percentage Distribution per Company".to_string(),
        y_label: "Category Percentage (%)".to_string(),
        companies,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::test_record;

    fn dataset() -> AuditDataset {
        AuditDataset::from_records(vec![
            test_record("A", "Cat1", 2.0, "k"),
            test_record("A", "Cat2", 1.0, "k"),
            test_record("B", "Cat1", 3.0, "k"),
        ])
    }

    #[test]
    fn one_series_per_category_with_company_percentages() {
        let ds = dataset();
        let visible: Vec<usize> = (0..ds.len()).collect();
        let spec = build(&ds, &visible);

        assert_eq!(spec.companies, vec!["A", "B"]);
        assert_eq!(spec.series.len(), 2);

        let cat1 = &spec.series[0];
        assert_eq!(cat1.category, "Cat1");
        assert_eq!(cat1.values.len(), 2);
        assert!((cat1.values[0].1 - 50.0).abs() < 1e-9);
        assert!((cat1.values[1].1 - 100.0).abs() < 1e-9);

        let cat2 = &spec.series[1];
        // B never recorded Cat2; no bar is synthesized for it.
        assert_eq!(cat2.values, vec![("A".to_string(), 50.0)]);
    }

    #[test]
    fn uses_full_category_set_not_top_n() {
        // Twelve categories for one company: all must survive.
        let records = (0..12)
            .map(|i| test_record("A", &format!("Cat{i:02}"), 1.0, "k"))
            .collect();
        let ds = AuditDataset::from_records(records);
        let visible: Vec<usize> = (0..ds.len()).collect();
        let spec = build(&ds, &visible);

        assert_eq!(spec.series.len(), 12);
    }

    #[test]
    fn series_colors_are_distinct_per_category() {
        let ds = dataset();
        let visible: Vec<usize> = (0..ds.len()).collect();
        let spec = build(&ds, &visible);
        assert_ne!(spec.series[0].color, spec.series[1].color);
    }

    #[test]
    fn empty_view_builds_an_empty_chart() {
        let ds = dataset();
        let spec = build(&ds, &[]);
        assert!(spec.companies.is_empty());
        assert!(spec.series.is_empty());
    }
}
