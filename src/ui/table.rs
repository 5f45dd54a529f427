use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Penguin, PenguinTable};

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Data table – egui_extras table over the filtered view
// ---------------------------------------------------------------------------

/// Render the filtered view as a striped, scrollable table.
pub fn data_table(ui: &mut Ui, table: &PenguinTable, view: &[usize]) {
    if view.is_empty() {
        ui.label("No penguins match the current filter.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(70.0), PenguinTable::COLUMNS.len())
        .min_scrolled_height(220.0)
        .header(20.0, |mut header| {
            for name in PenguinTable::COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.len(), |mut row| {
                let penguin = &table.rows()[view[row.index()]];
                for cell in row_cells(penguin) {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Data grid – plain egui grid over the same view
// ---------------------------------------------------------------------------

/// Render the filtered view as a plain grid.
pub fn data_grid(ui: &mut Ui, table: &PenguinTable, view: &[usize]) {
    if view.is_empty() {
        ui.label("No penguins match the current filter.");
        return;
    }

    ScrollArea::vertical()
        .id_salt("data_grid_scroll")
        .max_height(260.0)
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("penguin_grid")
                .striped(true)
                .min_col_width(70.0)
                .show(ui, |ui: &mut Ui| {
                    for name in PenguinTable::COLUMNS {
                        ui.strong(name);
                    }
                    ui.end_row();

                    for &i in view {
                        for cell in row_cells(&table.rows()[i]) {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Cell formatting
// ---------------------------------------------------------------------------

fn row_cells(penguin: &Penguin) -> [String; 8] {
    [
        penguin.species.to_string(),
        penguin.island.clone(),
        fmt_tenths(penguin.bill_length_mm),
        fmt_tenths(penguin.bill_depth_mm),
        fmt_whole(penguin.flipper_length_mm),
        fmt_whole(penguin.body_mass_g),
        penguin
            .sex
            .map(|s| s.to_string())
            .unwrap_or_else(|| "NA".to_string()),
        penguin.year.to_string(),
    ]
}

fn fmt_tenths(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "NA".to_string())
}

fn fmt_whole(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.0}"))
        .unwrap_or_else(|| "NA".to_string())
}
