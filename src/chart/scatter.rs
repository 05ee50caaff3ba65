use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;

use crate::color::CompanyColorRegistry;
use crate::data::model::AuditDataset;

/// Fixed x-axis range matching the 0–3 score scale with a small margin.
pub const X_RANGE: (f64, f64) = (-0.1, 3.1);

/// Half-width of the interval over which tied markers are spread.
const JITTER: f64 = 0.01;

// ---------------------------------------------------------------------------
// Max-score scatter: one marker per company on each selected category row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterMarker {
    pub company: String,
    pub color: Color32,
    /// Max score plus jitter offset.
    pub x: f64,
    /// Index into [`ScatterChartSpec::categories`].
    pub row: usize,
    /// Set on the first category row only, so the legend names each
    /// company exactly once.
    pub show_legend: bool,
}

/// Scatter chart specification: x = max score (fixed range, integer
/// ticks), y = one categorical row per selected category in selection
/// order.
#[derive(Debug, Clone)]
pub struct ScatterChartSpec {
    pub title: String,
    pub x_label: String,
    pub x_range: (f64, f64),
    /// Selected categories, selection order.
    pub categories: Vec<String>,
    pub markers: Vec<ScatterMarker>,
    /// Set when no categories are selected; the chart shell is still valid.
    pub note: Option<String>,
}

/// Build the max-score chart for the user's selected categories.
///
/// Every company present in the filtered view appears on every row; a
/// company without records in a category scores 0. Companies tied on
/// the same score are spread evenly over ±[`JITTER`] in company order,
/// so the output is identical for identical input.
pub fn build(
    dataset: &AuditDataset,
    visible: &[usize],
    selected_categories: &[String],
    colors: &mut CompanyColorRegistry,
) -> ScatterChartSpec {
    if selected_categories.is_empty() {
        return ScatterChartSpec {
            title: "No Categories Selected".to_string(),
            x_label: "Max Score".to_string(),
            x_range: X_RANGE,
            categories: Vec::new(),
            markers: Vec::new(),
            note: Some("Select one or more categories to compare max scores".to_string()),
        };
    }

    let companies: Vec<&str> = visible
        .iter()
        .map(|&idx| dataset.records[idx].company.as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .collect();

    let mut markers = Vec::new();

    for (row, category) in selected_categories.iter().enumerate() {
        // Max score per company, explicit 0 fill for absent companies.
        let mut max_scores: BTreeMap<&str, f64> =
            companies.iter().map(|&c| (c, 0.0)).collect();
        for &idx in visible {
            let rec = &dataset.records[idx];
            if &rec.category == category {
                let entry = max_scores.entry(rec.company.as_str()).or_insert(0.0);
                *entry = entry.max(rec.score);
            }
        }

        // Spread companies sharing an identical score over ±JITTER.
        let mut ties: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
        for (&company, &score) in &max_scores {
            ties.entry(score.to_bits()).or_default().push(company);
        }
        let mut offsets: BTreeMap<&str, f64> = BTreeMap::new();
        for group in ties.values() {
            if group.len() == 1 {
                offsets.insert(group[0], 0.0);
            } else {
                let step = 2.0 * JITTER / (group.len() - 1) as f64;
                for (i, &company) in group.iter().enumerate() {
                    offsets.insert(company, -JITTER + step * i as f64);
                }
            }
        }

        for &company in &companies {
            markers.push(ScatterMarker {
                company: company.to_string(),
                color: colors.color_for(company),
                x: max_scores[company] + offsets[company],
                row,
                show_legend: row == 0,
            });
        }
    }

    ScatterChartSpec {
        title: "Company Max Scores by Category".to_string(),
        x_label: "Max Score".to_string(),
        x_range: X_RANGE,
        categories: selected_categories.to_vec(),
        markers,
        note: None,
    }
}
