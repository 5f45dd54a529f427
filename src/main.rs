mod app;
mod chart;
mod color;
mod data;
mod reactive;
mod state;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use app::PenguinDashApp;
use data::model::PenguinTable;
use eframe::egui;

/// Load the source table: the file named by `PENGUIN_DATA` (same schema,
/// `.csv` or `.json`) when set, the bundled sample otherwise.
fn load_table() -> anyhow::Result<PenguinTable> {
    match std::env::var_os("PENGUIN_DATA") {
        Some(path) => {
            let path = PathBuf::from(path);
            log::info!("loading dataset from {}", path.display());
            data::loader::load_file(&path)
                .with_context(|| format!("loading dataset from {}", path.display()))
        }
        None => data::loader::embedded_dataset().context("loading bundled dataset"),
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let table = match load_table() {
        Ok(table) => Arc::new(table),
        Err(e) => {
            log::error!("failed to load dataset: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} penguins across {} columns",
        table.len(),
        PenguinTable::COLUMNS.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguin Dash – Palmer Penguins Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(table)))),
    )
}
