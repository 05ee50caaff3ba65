mod analytics;
mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::AuditLensApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path as the first argument. A path that cannot be
    // loaded at startup is fatal; files opened later through the dialog
    // only surface a status message.
    let initial_dataset = match std::env::args().nth(1) {
        Some(arg) => match data::loader::load_file(Path::new(&arg)) {
            Ok(dataset) => {
                log::info!("Loaded {} records from {arg}", dataset.len());
                Some(dataset)
            }
            Err(e) => {
                log::error!("Failed to load {arg}: {e:#}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Audit Lens – Survey Dashboard",
        options,
        Box::new(move |_cc| {
            let mut app = AuditLensApp::default();
            if let Some(dataset) = initial_dataset {
                app.state.set_dataset(dataset);
            }
            Ok(Box::new(app))
        }),
    )
}
