use eframe::egui::Color32;

use crate::analytics::CategoryPercentage;
use crate::color::CompanyColorRegistry;

// ---------------------------------------------------------------------------
// Radar chart: one closed polygon per company over the top categories
// ---------------------------------------------------------------------------

/// One company's polygon. `points` holds (radius, category label) pairs
/// with the first pair repeated at the end so the outline closes.
#[derive(Debug, Clone)]
pub struct RadarSeries {
    pub company: String,
    pub color: Color32,
    pub points: Vec<(f64, String)>,
}

/// Radar chart specification.
///
/// The fill is transparent by contract; only the outline and legend
/// carry the company identity. Radial tick labels are suppressed,
/// category labels shown.
#[derive(Debug, Clone)]
pub struct RadarChartSpec {
    pub title: String,
    /// Angular axis labels, best category first.
    pub categories: Vec<String>,
    pub series: Vec<RadarSeries>,
    /// Shared radial maximum: the largest percentage observed, not 100.
    pub axis_max: f64,
}

/// Build the radar chart from percentage rows already restricted to the
/// top categories.
pub fn build(
    rows: &[CategoryPercentage],
    top_categories: &[String],
    colors: &mut CompanyColorRegistry,
) -> RadarChartSpec {
    let axis_max = rows
        .iter()
        .map(|r| r.percentage)
        .fold(0.0_f64, f64::max);

    // Rows arrive sorted by company, so each company's block is contiguous.
    let mut series: Vec<RadarSeries> = Vec::new();
    for row in rows {
        let start_new = series
            .last()
            .map_or(true, |s: &RadarSeries| s.company != row.company);
        if start_new {
            series.push(RadarSeries {
                company: row.company.clone(),
                color: colors.color_for(&row.company),
                points: Vec::new(),
            });
        }
        if let Some(current) = series.last_mut() {
            current.points.push((row.percentage, row.category.clone()));
        }
    }

    // Close each polygon by repeating its first point.
    for s in &mut series {
        if let Some(first) = s.points.first().cloned() {
            s.points.push(first);
        }
    }

    RadarChartSpec {
        title: "Topic Volume by Company".to_string(),
        categories: top_categories.to_vec(),
        series,
        axis_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{compute_category_percentages, select_top_categories};
    use crate::data::model::{test_record, AuditDataset};

    fn build_from(ds: &AuditDataset) -> RadarChartSpec {
        let visible: Vec<usize> = (0..ds.len()).collect();
        let rows = compute_category_percentages(ds, &visible);
        let (filtered, top) = select_top_categories(&rows, 10);
        build(&filtered, &top, &mut CompanyColorRegistry::default())
    }

    #[test]
    fn polygons_are_closed() {
        let ds = AuditDataset::from_records(vec![
            test_record("A", "Cat1", 2.0, "k"),
            test_record("A", "Cat2", 1.0, "k"),
            test_record("B", "Cat1", 3.0, "k"),
        ]);
        let spec = build_from(&ds);

        assert_eq!(spec.series.len(), 2);
        for s in &spec.series {
            assert!(s.points.len() >= 2);
            assert_eq!(s.points.first(), s.points.last());
        }
    }

    #[test]
    fn axis_max_tracks_largest_percentage() {
        let ds = AuditDataset::from_records(vec![
            test_record("A", "Cat1", 2.0, "k"),
            test_record("A", "Cat2", 1.0, "k"),
            test_record("B", "Cat1", 3.0, "k"),
        ]);
        let spec = build_from(&ds);

        // B has a single category at 100%.
        assert!((spec.axis_max - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_builds_an_empty_chart() {
        let spec = build(&[], &[], &mut CompanyColorRegistry::default());
        assert!(spec.series.is_empty());
        assert!(spec.categories.is_empty());
        assert_eq!(spec.axis_max, 0.0);
    }

    #[test]
    fn each_company_keeps_its_registry_color() {
        let ds = AuditDataset::from_records(vec![
            test_record("A", "Cat1", 2.0, "k"),
            test_record("B", "Cat1", 3.0, "k"),
        ]);
        let visible: Vec<usize> = (0..ds.len()).collect();
        let rows = compute_category_percentages(&ds, &visible);
        let (filtered, top) = select_top_categories(&rows, 10);

        let mut colors = CompanyColorRegistry::default();
        let expected_a = colors.color_for("A");
        let expected_b = colors.color_for("B");
        let spec = build(&filtered, &top, &mut colors);

        assert_eq!(spec.series[0].color, expected_a);
        assert_eq!(spec.series[1].color, expected_b);
    }
}
