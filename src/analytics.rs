use std::collections::BTreeMap;

use crate::data::model::AuditDataset;

// ---------------------------------------------------------------------------
// Category percentage aggregation
// ---------------------------------------------------------------------------

/// Share of one category within one company's records.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPercentage {
    pub company: String,
    pub category: String,
    /// Occurrences of (company, category) in the view.
    pub count: usize,
    /// Total record count for the company in the view.
    pub company_total: usize,
    /// `100 * count / company_total`.
    pub percentage: f64,
}

/// Count (company, category) occurrences over the visible records and
/// express each count as a percentage of its company's total.
///
/// Returns one row per pair actually observed, ordered by company then
/// category. Percentages for a fixed company sum to 100 whenever the
/// company has at least one visible record.
pub fn compute_category_percentages(
    dataset: &AuditDataset,
    visible: &[usize],
) -> Vec<CategoryPercentage> {
    let mut pair_counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    let mut company_totals: BTreeMap<&str, usize> = BTreeMap::new();

    for &idx in visible {
        let rec = &dataset.records[idx];
        *pair_counts
            .entry((rec.company.as_str(), rec.category.as_str()))
            .or_default() += 1;
        *company_totals.entry(rec.company.as_str()).or_default() += 1;
    }

    pair_counts
        .into_iter()
        .map(|((company, category), count)| {
            let company_total = company_totals.get(company).copied().unwrap_or(0);
            let percentage = if company_total == 0 {
                0.0
            } else {
                100.0 * count as f64 / company_total as f64
            };
            CategoryPercentage {
                company: company.to_string(),
                category: category.to_string(),
                count,
                company_total,
                percentage,
            }
        })
        .collect()
}

/// Keep the `top_n` categories with the highest cross-company mean
/// percentage.
///
/// The mean is unweighted and taken only over companies that have the
/// category at all. Ties sort by category name ascending so the result
/// is stable. Returns the rows restricted to the winning categories and
/// the winners themselves, best first. `top_n == 0` yields empty output.
pub fn select_top_categories(
    percentages: &[CategoryPercentage],
    top_n: usize,
) -> (Vec<CategoryPercentage>, Vec<String>) {
    if top_n == 0 {
        return (Vec::new(), Vec::new());
    }

    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in percentages {
        let entry = sums.entry(row.category.as_str()).or_insert((0.0, 0));
        entry.0 += row.percentage;
        entry.1 += 1;
    }

    let mut averages: Vec<(&str, f64)> = sums
        .into_iter()
        .map(|(category, (sum, n))| (category, sum / n as f64))
        .collect();
    averages.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    averages.truncate(top_n);

    let top: Vec<String> = averages.iter().map(|(c, _)| c.to_string()).collect();
    let filtered = percentages
        .iter()
        .filter(|row| top.iter().any(|c| *c == row.category))
        .cloned()
        .collect();

    (filtered, top)
}
