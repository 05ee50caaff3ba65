use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// The three filterable columns.
#[derive(Debug, Clone, Copy)]
enum FilterColumn {
    Company,
    Category,
    Keywords,
}

impl FilterColumn {
    fn label(self) -> &'static str {
        match self {
            FilterColumn::Company => "Company",
            FilterColumn::Category => "Category",
            FilterColumn::Keywords => "Search Keywords",
        }
    }

    fn selected<'a>(self, state: &'a AppState) -> &'a Vec<String> {
        match self {
            FilterColumn::Company => &state.filters.companies,
            FilterColumn::Category => &state.filters.categories,
            FilterColumn::Keywords => &state.filters.keywords,
        }
    }

    fn toggle(self, state: &mut AppState, value: &str) {
        match self {
            FilterColumn::Company => state.toggle_company(value),
            FilterColumn::Category => state.toggle_category(value),
            FilterColumn::Keywords => state.toggle_keyword(value),
        }
    }

    fn clear(self, state: &mut AppState) {
        match self {
            FilterColumn::Company => state.filters.companies.clear(),
            FilterColumn::Category => state.filters.categories.clear(),
            FilterColumn::Keywords => state.filters.keywords.clear(),
        }
        state.refilter();
    }
}

/// Render the left filter panel: one multi-select section per column.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.label(RichText::new("Empty selection shows everything").small());
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the value lists so we can mutate state inside the loop.
    let companies = dataset.companies.clone();
    let categories = dataset.categories.clone();
    let keywords = dataset.keywords.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            filter_section(ui, state, FilterColumn::Company, &companies);
            filter_section(ui, state, FilterColumn::Category, &categories);
            filter_section(ui, state, FilterColumn::Keywords, &keywords);
        });
}

/// One collapsible multi-select block with a Clear button.
fn filter_section(ui: &mut Ui, state: &mut AppState, column: FilterColumn, all_values: &[String]) {
    let n_selected = column.selected(state).len();
    let header_text = if n_selected == 0 {
        format!("{}  (all)", column.label())
    } else {
        format!("{}  ({n_selected}/{})", column.label(), all_values.len())
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(column.label())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Clear").clicked() {
                column.clear(state);
            }

            for value in all_values {
                let mut checked = column.selected(state).iter().any(|v| v == value);
                if ui.checkbox(&mut checked, value).changed() {
                    column.toggle(state, value);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open audit data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records: {} companies, {} categories",
                    dataset.len(),
                    dataset.companies.len(),
                    dataset.categories.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
