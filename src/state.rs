use crate::analytics::{compute_category_percentages, select_top_categories};
use crate::chart::{bar, radar, scatter, ChartSet};
use crate::color::CompanyColorRegistry;
use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::AuditDataset;

/// Categories kept for the radar chart.
pub const TOP_CATEGORIES: usize = 10;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<AuditDataset>,

    /// Multi-select filters for Company / Category / Search_Keywords.
    pub filters: FilterSelection,

    /// Indices of records passing the current filters.
    pub visible_indices: Vec<usize>,

    /// Chart specs rebuilt on every filter change.
    pub charts: Option<ChartSet>,

    /// Company → colour assignment, kept for the whole session.
    pub colors: CompanyColorRegistry,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterSelection::default(),
            visible_indices: Vec::new(),
            charts: None,
            colors: CompanyColorRegistry::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and build the initial charts.
    pub fn set_dataset(&mut self, dataset: AuditDataset) {
        self.filters = FilterSelection::default();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Filter-change event handler: recompute the visible view and
    /// rebuild all three chart specs from scratch.
    pub fn refilter(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.visible_indices.clear();
            self.charts = None;
            return;
        };

        self.visible_indices = filtered_indices(dataset, &self.filters);

        let bar = bar::build(dataset, &self.visible_indices);

        let percentages = compute_category_percentages(dataset, &self.visible_indices);
        let (top_rows, top_categories) = select_top_categories(&percentages, TOP_CATEGORIES);
        let radar = radar::build(&top_rows, &top_categories, &mut self.colors);

        let scatter = scatter::build(
            dataset,
            &self.visible_indices,
            &self.filters.categories,
            &mut self.colors,
        );

        self.charts = Some(ChartSet { bar, radar, scatter });
    }

    /// Toggle a company filter value.
    pub fn toggle_company(&mut self, value: &str) {
        FilterSelection::toggle(&mut self.filters.companies, value);
        self.refilter();
    }

    /// Toggle a category filter value.
    pub fn toggle_category(&mut self, value: &str) {
        FilterSelection::toggle(&mut self.filters.categories, value);
        self.refilter();
    }

    /// Toggle a search-keyword filter value.
    pub fn toggle_keyword(&mut self, value: &str) {
        FilterSelection::toggle(&mut self.filters.keywords, value);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{test_record, AuditDataset};

    fn dataset() -> AuditDataset {
        AuditDataset::from_records(vec![
            test_record("A", "Water", 2.0, "kw1"),
            test_record("A", "Waste", 1.0, "kw2"),
            test_record("B", "Water", 3.0, "kw1"),
        ])
    }

    #[test]
    fn set_dataset_builds_charts_for_all_rows() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        let charts = state.charts.as_ref().unwrap();
        assert_eq!(charts.bar.companies, vec!["A", "B"]);
        assert_eq!(charts.radar.series.len(), 2);
        // No categories selected yet → scatter renders its empty shell.
        assert!(charts.scatter.markers.is_empty());
        assert!(charts.scatter.note.is_some());
    }

    #[test]
    fn toggling_a_category_restricts_view_and_feeds_scatter() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.toggle_category("Water");

        assert_eq!(state.visible_indices, vec![0, 2]);
        let charts = state.charts.as_ref().unwrap();
        assert_eq!(charts.scatter.categories, vec!["Water"]);
        assert_eq!(charts.scatter.markers.len(), 2);
    }

    #[test]
    fn filters_excluding_everything_degrade_to_empty_charts() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.toggle_company("A");
        state.toggle_keyword("kw1");
        state.toggle_category("Waste");

        assert!(state.visible_indices.is_empty());
        let charts = state.charts.as_ref().unwrap();
        assert!(charts.bar.series.is_empty());
        assert!(charts.radar.series.is_empty());
        assert!(charts.scatter.markers.is_empty());
    }

    #[test]
    fn company_colors_survive_refilters() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.toggle_category("Water");
        let color_a = {
            let charts = state.charts.as_ref().unwrap();
            charts.scatter.markers[0].color
        };

        state.toggle_company("B");
        state.toggle_company("B");
        let charts = state.charts.as_ref().unwrap();
        assert_eq!(charts.scatter.markers[0].color, color_a);
    }
}
