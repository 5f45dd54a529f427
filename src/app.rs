use std::sync::Arc;

use eframe::egui;

use crate::data::model::PenguinTable;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Which chart occupies the central tab area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTab {
    StackedHistogram,
    GroupedHistogram,
    Scatter,
    SpeciesPie,
}

impl ChartTab {
    const ALL: [ChartTab; 4] = [
        ChartTab::StackedHistogram,
        ChartTab::GroupedHistogram,
        ChartTab::Scatter,
        ChartTab::SpeciesPie,
    ];

    fn label(self) -> &'static str {
        match self {
            ChartTab::StackedHistogram => "Stacked Histogram",
            ChartTab::GroupedHistogram => "Grouped Histogram",
            ChartTab::Scatter => "Scatterplot",
            ChartTab::SpeciesPie => "Species Pie",
        }
    }
}

pub struct PenguinDashApp {
    state: AppState,
    active_tab: ChartTab,
}

impl PenguinDashApp {
    pub fn new(table: Arc<PenguinTable>) -> Self {
        let mut state = AppState::new(table);
        state.on_settle(|changed| log::debug!("inputs settled: {changed:?}"));
        PenguinDashApp {
            state,
            active_tab: ChartTab::StackedHistogram,
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and row counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: inputs (ends with the frame's settle) ----
        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: data views and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::CollapsingHeader::new("Data Table")
                .default_open(false)
                .show(ui, |ui| {
                    let (table, view) = self.state.table_and_view();
                    table::data_table(ui, table, view);
                });
            egui::CollapsingHeader::new("Data Grid")
                .default_open(false)
                .show(ui, |ui| {
                    let (table, view) = self.state.table_and_view();
                    table::data_grid(ui, table, view);
                });
            ui.separator();

            ui.horizontal(|ui| {
                for tab in ChartTab::ALL {
                    ui.selectable_value(&mut self.active_tab, tab, tab.label());
                }
            });
            ui.separator();

            match self.active_tab {
                ChartTab::StackedHistogram => {
                    plot::histogram_chart(ui, "stacked_histogram", self.state.stacked_histogram());
                }
                ChartTab::GroupedHistogram => {
                    plot::histogram_chart(ui, "grouped_histogram", self.state.grouped_histogram());
                }
                ChartTab::Scatter => {
                    plot::scatter_chart(ui, self.state.scatter_plot());
                }
                ChartTab::SpeciesPie => {
                    plot::pie_chart(ui, self.state.species_pie());
                }
            }
        });
    }
}
