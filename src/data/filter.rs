use super::model::AuditDataset;

// ---------------------------------------------------------------------------
// Filter selection: which values are allowed per column
// ---------------------------------------------------------------------------

/// Per-column selection state for the three filterable columns.
///
/// An empty list means "no filter on this field" (show everything).
/// Each list keeps the order in which the user selected values; the
/// scatter chart iterates `categories` in exactly that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub companies: Vec<String>,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
}

impl FilterSelection {
    /// Whether a value passes one column's selection.
    fn allows(selected: &[String], value: &str) -> bool {
        selected.is_empty() || selected.iter().any(|s| s == value)
    }

    /// Toggle a value in one of the selection lists, preserving order.
    pub fn toggle(list: &mut Vec<String>, value: &str) {
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
        } else {
            list.push(value.to_string());
        }
    }
}

/// Return indices of records that pass all three active filters.
///
/// A record passes a column filter when the selection for that column is
/// empty (no constraint) or contains the record's value.
pub fn filtered_indices(dataset: &AuditDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            FilterSelection::allows(&selection.companies, &rec.company)
                && FilterSelection::allows(&selection.categories, &rec.category)
                && FilterSelection::allows(&selection.keywords, &rec.keywords)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{test_record, AuditDataset};

    fn dataset() -> AuditDataset {
        AuditDataset::from_records(vec![
            test_record("Alpha", "Water", 2.0, "kw1"),
            test_record("Alpha", "Waste", 1.0, "kw2"),
            test_record("Beta", "Water", 3.0, "kw1"),
            test_record("Gamma", "Energy", 0.0, "kw3"),
        ])
    }

    #[test]
    fn empty_selection_passes_everything() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &FilterSelection::default());
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn company_filter_restricts_rows() {
        let ds = dataset();
        let sel = FilterSelection {
            companies: vec!["Alpha".to_string()],
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1]);
    }

    #[test]
    fn filters_compose_across_columns() {
        let ds = dataset();
        let sel = FilterSelection {
            companies: vec!["Alpha".to_string(), "Beta".to_string()],
            categories: vec!["Water".to_string()],
            keywords: vec!["kw1".to_string()],
        };
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 2]);
    }

    #[test]
    fn selection_excluding_all_rows_yields_empty_view() {
        let ds = dataset();
        let sel = FilterSelection {
            companies: vec!["Alpha".to_string()],
            categories: vec!["Energy".to_string()],
            ..Default::default()
        };
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn toggle_preserves_selection_order() {
        let mut list = Vec::new();
        FilterSelection::toggle(&mut list, "Water");
        FilterSelection::toggle(&mut list, "Energy");
        FilterSelection::toggle(&mut list, "Waste");
        assert_eq!(list, vec!["Water", "Energy", "Waste"]);

        FilterSelection::toggle(&mut list, "Energy");
        assert_eq!(list, vec!["Water", "Waste"]);
    }
}
