use eframe::egui::{self, RichText, Ui};

use crate::color::legend_entries;
use crate::data::model::{NumericColumn, Sex};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – input widgets
// ---------------------------------------------------------------------------

/// Render the sidebar with every user-settable input. All writes go through
/// the `AppState` setters; the pass ends with a single settle so that
/// multiple edits in one frame invalidate downstream values exactly once.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    ui.strong("Attribute");
    let current = state.selection().attribute;
    egui::ComboBox::from_id_salt("attribute")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for column in NumericColumn::ALL {
                if ui
                    .selectable_label(current == column, column.label())
                    .clicked()
                {
                    state.set_attribute(column);
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Sex");
    let current_sex = state.selection().sex;
    egui::ComboBox::from_id_salt("sex")
        .selected_text(current_sex.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for sex in Sex::ALL {
                if ui
                    .selectable_label(current_sex == sex, sex.to_string())
                    .clicked()
                {
                    state.set_sex(sex);
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Stacked histogram bins");
    let mut bin_count = state.selection().bin_count;
    if ui.add(egui::DragValue::new(&mut bin_count).speed(1)).changed() {
        state.set_bin_count(bin_count);
    }
    ui.add_space(8.0);

    ui.strong("Grouped histogram bins");
    let mut grouped_bins = state.selection().grouped_bin_count;
    if ui
        .add(egui::Slider::new(&mut grouped_bins, 1..=100))
        .changed()
    {
        state.set_grouped_bin_count(grouped_bins);
    }
    ui.add_space(8.0);

    ui.strong("Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_species();
        }
        if ui.small_button("None").clicked() {
            state.select_no_species();
        }
    });
    for (species, color) in legend_entries() {
        let mut checked = state.selection().species.contains(&species);
        let label = RichText::new(species.to_string()).color(color);
        if ui.checkbox(&mut checked, label).changed() {
            state.toggle_species(species);
        }
    }

    // Apply this pass's writes as one batch.
    state.settle();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with row counts.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Penguin Dash").strong());
        ui.separator();
        let total = state.table().len();
        let visible = state.filtered_view().len();
        ui.label(format!("{total} penguins loaded, {visible} in view"));
    });
}
