use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::AuditDataset;

// ---------------------------------------------------------------------------
// Filtered record table
// ---------------------------------------------------------------------------

/// Render the currently visible records below the charts.
pub fn filtered_table(ui: &mut Ui, dataset: &AuditDataset, visible: &[usize]) {
    ui.heading("Filtered Records");
    ui.label(format!("{} of {} records", visible.len(), dataset.len()));

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Company", "Category", "Score", "Search Keywords"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, visible.len(), |mut row| {
                let rec = &dataset.records[visible[row.index()]];
                row.col(|ui| {
                    ui.label(&rec.company);
                });
                row.col(|ui| {
                    ui.label(&rec.category);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.score));
                });
                row.col(|ui| {
                    ui.label(&rec.keywords);
                });
            });
        });
}
