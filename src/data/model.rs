use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – one row of the source spreadsheet
// ---------------------------------------------------------------------------

/// A single audit record (one row of the source file).
///
/// The serde field names mirror the source spreadsheet's column headers;
/// extra columns in the file are ignored at load time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Search_Keywords")]
    pub keywords: String,
}

// ---------------------------------------------------------------------------
// AuditDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed unique-value lists.
///
/// Loaded once and never mutated afterwards; filters only derive index
/// views into `records`.
#[derive(Debug, Clone, Default)]
pub struct AuditDataset {
    /// All records (rows), in file order.
    pub records: Vec<Record>,
    /// Sorted unique company names.
    pub companies: Vec<String>,
    /// Sorted unique category names.
    pub categories: Vec<String>,
    /// Sorted unique search-keyword values.
    pub keywords: Vec<String>,
}

impl AuditDataset {
    /// Build the unique-value indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut companies: BTreeSet<&str> = BTreeSet::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();
        let mut keywords: BTreeSet<&str> = BTreeSet::new();

        for rec in &records {
            companies.insert(&rec.company);
            categories.insert(&rec.category);
            keywords.insert(&rec.keywords);
        }

        let companies: Vec<String> = companies.into_iter().map(String::from).collect();
        let categories: Vec<String> = categories.into_iter().map(String::from).collect();
        let keywords: Vec<String> = keywords.into_iter().map(String::from).collect();

        AuditDataset {
            records,
            companies,
            categories,
            keywords,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_record(company: &str, category: &str, score: f64, kw: &str) -> Record {
    Record {
        company: company.to_string(),
        category: category.to_string(),
        score,
        keywords: kw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_values_are_sorted_and_deduplicated() {
        let ds = AuditDataset::from_records(vec![
            test_record("Beta", "Waste", 2.0, "kw2"),
            test_record("Alpha", "Water", 1.0, "kw1"),
            test_record("Beta", "Water", 3.0, "kw1"),
        ]);

        assert_eq!(ds.companies, vec!["Alpha", "Beta"]);
        assert_eq!(ds.categories, vec!["Waste", "Water"]);
        assert_eq!(ds.keywords, vec!["kw1", "kw2"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset() {
        let ds = AuditDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.companies.is_empty());
    }
}
