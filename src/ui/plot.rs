use eframe::egui::{self, Color32, Mesh, Pos2, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::chart::{BarLayout, ChartError, HistogramSpec, PieSpec, ScatterSpec};
use crate::color::species_color;
use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Histograms
// ---------------------------------------------------------------------------

/// Render a histogram spec, either layout. Chart errors are presented in
/// place of the plot; an empty spec degrades to a "no data" message.
pub fn histogram_chart(ui: &mut Ui, id: &'static str, spec: &Result<HistogramSpec, ChartError>) {
    let spec = match spec {
        Ok(spec) => spec,
        Err(err) => {
            error_label(ui, err);
            return;
        }
    };
    if spec.is_empty() {
        no_data_label(ui);
        return;
    }

    ui.label(format!(
        "n = {} in {} bins",
        spec.total_count(),
        spec.bins.len()
    ));
    let [adelie, chinstrap, gentoo] = species_bar_charts(spec);

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(spec.column.label())
        .y_axis_label("count")
        .show(ui, |plot_ui| match spec.layout {
            BarLayout::Stacked => {
                let chinstrap = chinstrap.stack_on(&[&adelie]);
                let gentoo = gentoo.stack_on(&[&adelie, &chinstrap]);
                plot_ui.bar_chart(adelie);
                plot_ui.bar_chart(chinstrap);
                plot_ui.bar_chart(gentoo);
            }
            BarLayout::Grouped => {
                plot_ui.bar_chart(adelie);
                plot_ui.bar_chart(chinstrap);
                plot_ui.bar_chart(gentoo);
            }
        });
}

/// One bar chart per species, in [`Species::ALL`] order, with the geometry
/// the spec's layout calls for.
fn species_bar_charts(spec: &HistogramSpec) -> [BarChart; 3] {
    Species::ALL.map(|species| {
        let si = species.index();
        let bars: Vec<Bar> = spec
            .bins
            .iter()
            .map(|bin| {
                let (x, width) = match spec.layout {
                    BarLayout::Stacked => (bin.center(), bin.width() * 0.95),
                    BarLayout::Grouped => {
                        // Three sub-bars side by side inside the bin.
                        let sub = bin.width() / 3.0;
                        (bin.center() + (si as f64 - 1.0) * sub, sub * 0.9)
                    }
                };
                Bar::new(x, bin.counts[si] as f64).width(width)
            })
            .collect();

        BarChart::new(bars)
            .name(species.to_string())
            .color(species_color(species))
    })
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Render the per-species scatter of the selected attribute against bill
/// length.
pub fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec) {
    if spec.is_empty() {
        no_data_label(ui);
        return;
    }

    ui.label(format!("n = {}", spec.point_count()));
    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(spec.x_column.label())
        .y_axis_label(spec.y_column.label())
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.clone().into();
                plot_ui.points(
                    Points::new(points)
                        .name(series.species.to_string())
                        .color(species_color(series.species))
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Species pie
// ---------------------------------------------------------------------------

/// Render the full-population species pie with a legend beside it.
pub fn pie_chart(ui: &mut Ui, spec: &PieSpec) {
    if spec.total == 0 {
        no_data_label(ui);
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let side = ui
            .available_height()
            .min(ui.available_width() * 0.6)
            .clamp(140.0, 340.0);
        let (response, painter) = ui.allocate_painter(egui::Vec2::splat(side), egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) / 2.0 - 4.0;

        // Slices start at 12 o'clock and run clockwise.
        let mut start = -std::f64::consts::FRAC_PI_2;
        for slice in &spec.slices {
            let sweep = slice.fraction * std::f64::consts::TAU;
            painter.add(pie_slice_mesh(
                center,
                radius,
                start,
                sweep,
                species_color(slice.species),
            ));
            start += sweep;
        }

        ui.add_space(12.0);
        ui.vertical(|ui: &mut Ui| {
            for slice in &spec.slices {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(species_color(slice.species)));
                    ui.label(format!(
                        "{}: {} ({:.1}%)",
                        slice.species,
                        slice.count,
                        slice.fraction * 100.0
                    ));
                });
            }
        });
    });
}

/// Filled pie slice as a triangle fan. Roughly 2° per segment keeps the arc
/// smooth at dashboard sizes.
fn pie_slice_mesh(center: Pos2, radius: f32, start: f64, sweep: f64, color: Color32) -> Mesh {
    let steps = ((sweep / 0.035).ceil() as usize).max(1);
    let mut mesh = Mesh::default();

    mesh.colored_vertex(center, color);
    for k in 0..=steps {
        let angle = start + sweep * k as f64 / steps as f64;
        let dir = egui::Vec2::new(angle.cos() as f32, angle.sin() as f32);
        mesh.colored_vertex(center + radius * dir, color);
    }
    for k in 0..steps as u32 {
        mesh.add_triangle(0, k + 1, k + 2);
    }
    mesh
}

// ---------------------------------------------------------------------------
// Shared empty / error presentation
// ---------------------------------------------------------------------------

fn no_data_label(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label("No penguins match the current filter.");
    });
}

fn error_label(ui: &mut Ui, err: &ChartError) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(format!("Chart error: {err}")).color(Color32::RED));
    });
}
