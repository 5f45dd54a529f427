use std::collections::BTreeSet;
use std::sync::Arc;

use crate::chart::{self, BarLayout, ChartError, HistogramSpec, PieSpec, ScatterSpec};
use crate::data::filter::filtered_indices;
use crate::data::model::{NumericColumn, PenguinTable, Sex, Species};
use crate::reactive::{ChangeTracker, Derived};

// ---------------------------------------------------------------------------
// Named inputs
// ---------------------------------------------------------------------------

/// The user-settable inputs tracked for invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputId {
    Attribute,
    Sex,
    BinCount,
    GroupedBinCount,
    SpeciesFilter,
}

/// Current values of every user-settable input.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Measurement column the histograms and the scatter x axis read.
    pub attribute: NumericColumn,
    /// Declared and settable, but not read by the filter logic.
    pub sex: Sex,
    /// Bin count for the stacked histogram. Entered through an unconstrained
    /// numeric field; zero is representable and fails at chart construction.
    pub bin_count: u32,
    /// Bin count for the grouped histogram, bounded to 1..=100 by its slider.
    pub grouped_bin_count: u32,
    /// Species participating in the filtered view.
    pub species: BTreeSet<Species>,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            attribute: NumericColumn::BillLength,
            sex: Sex::Male,
            bin_count: 45,
            grouped_bin_count: 45,
            species: BTreeSet::from([Species::Gentoo]),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state / view model
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
///
/// Owns the immutable source table, the current [`Selection`], and one
/// [`Derived`] cell per output. Widgets write through the setters (which mark
/// inputs changed), the frame ends the input pass with [`settle`], and the
/// artifact accessors recompute lazily on read.
pub struct AppState {
    table: Arc<PenguinTable>,
    selection: Selection,
    tracker: ChangeTracker<InputId>,

    filtered: Derived<InputId, Vec<usize>>,
    stacked: Derived<InputId, Result<HistogramSpec, ChartError>>,
    grouped: Derived<InputId, Result<HistogramSpec, ChartError>>,
    scatter: Derived<InputId, ScatterSpec>,
    pie: Derived<InputId, PieSpec>,
}

impl AppState {
    pub fn new(table: Arc<PenguinTable>) -> Self {
        AppState {
            table,
            selection: Selection::default(),
            tracker: ChangeTracker::new(),
            filtered: Derived::new([InputId::SpeciesFilter]),
            stacked: Derived::new([
                InputId::SpeciesFilter,
                InputId::Attribute,
                InputId::BinCount,
            ]),
            grouped: Derived::new([
                InputId::SpeciesFilter,
                InputId::Attribute,
                InputId::GroupedBinCount,
            ]),
            scatter: Derived::new([InputId::SpeciesFilter, InputId::Attribute]),
            // The pie reads the unfiltered table only; no input invalidates it.
            pie: Derived::new([]),
        }
    }

    pub fn table(&self) -> &PenguinTable {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Register a consumer notified on every settle with the changed inputs.
    pub fn on_settle(&mut self, subscriber: impl FnMut(&[InputId]) + 'static) {
        self.tracker.subscribe(Box::new(subscriber));
    }

    // -- input writes ------------------------------------------------------

    pub fn set_attribute(&mut self, attribute: NumericColumn) {
        if self.selection.attribute != attribute {
            self.selection.attribute = attribute;
            self.tracker.mark_changed(InputId::Attribute);
        }
    }

    pub fn set_sex(&mut self, sex: Sex) {
        if self.selection.sex != sex {
            self.selection.sex = sex;
            self.tracker.mark_changed(InputId::Sex);
        }
    }

    pub fn set_bin_count(&mut self, bin_count: u32) {
        if self.selection.bin_count != bin_count {
            self.selection.bin_count = bin_count;
            self.tracker.mark_changed(InputId::BinCount);
        }
    }

    pub fn set_grouped_bin_count(&mut self, bin_count: u32) {
        if self.selection.grouped_bin_count != bin_count {
            self.selection.grouped_bin_count = bin_count;
            self.tracker.mark_changed(InputId::GroupedBinCount);
        }
    }

    /// Toggle one species in the filter.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.selection.species.remove(&species) {
            self.selection.species.insert(species);
        }
        self.tracker.mark_changed(InputId::SpeciesFilter);
    }

    /// Select all species.
    pub fn select_all_species(&mut self) {
        if self.selection.species.len() != Species::ALL.len() {
            self.selection.species = Species::ALL.into_iter().collect();
            self.tracker.mark_changed(InputId::SpeciesFilter);
        }
    }

    /// Deselect all species.
    pub fn select_no_species(&mut self) {
        if !self.selection.species.is_empty() {
            self.selection.species.clear();
            self.tracker.mark_changed(InputId::SpeciesFilter);
        }
    }

    /// Apply the input writes of the current pass as one batch. Returns true
    /// if anything changed.
    pub fn settle(&mut self) -> bool {
        self.tracker.settle().is_some()
    }

    // -- derived reads -----------------------------------------------------

    /// Row indices of the current filtered view, in table order. Memoized
    /// per settled generation.
    pub fn filtered_view(&mut self) -> &[usize] {
        let Self {
            table,
            selection,
            tracker,
            filtered,
            ..
        } = self;
        filtered.read(tracker, || filtered_indices(table, &selection.species))
    }

    /// Source table together with the current filtered view, for the table
    /// and grid renderers.
    pub fn table_and_view(&mut self) -> (&PenguinTable, &[usize]) {
        let Self {
            table,
            selection,
            tracker,
            filtered,
            ..
        } = self;
        let view = filtered.read(tracker, || filtered_indices(table, &selection.species));
        (table, view)
    }

    /// Stacked histogram of the selected attribute over the filtered view.
    pub fn stacked_histogram(&mut self) -> &Result<HistogramSpec, ChartError> {
        let Self {
            table,
            selection,
            tracker,
            filtered,
            stacked,
            ..
        } = self;
        let view = filtered.read(tracker, || filtered_indices(table, &selection.species));
        stacked.read(tracker, || {
            chart::histogram::build(
                table,
                view,
                selection.attribute,
                selection.bin_count,
                BarLayout::Stacked,
            )
        })
    }

    /// Grouped histogram of the selected attribute over the filtered view.
    pub fn grouped_histogram(&mut self) -> &Result<HistogramSpec, ChartError> {
        let Self {
            table,
            selection,
            tracker,
            filtered,
            grouped,
            ..
        } = self;
        let view = filtered.read(tracker, || filtered_indices(table, &selection.species));
        grouped.read(tracker, || {
            chart::histogram::build(
                table,
                view,
                selection.attribute,
                selection.grouped_bin_count,
                BarLayout::Grouped,
            )
        })
    }

    /// Scatter of the selected attribute against bill length over the
    /// filtered view.
    pub fn scatter_plot(&mut self) -> &ScatterSpec {
        let Self {
            table,
            selection,
            tracker,
            filtered,
            scatter,
            ..
        } = self;
        let view = filtered.read(tracker, || filtered_indices(table, &selection.species));
        scatter.read(tracker, || {
            chart::scatter::build(table, view, selection.attribute)
        })
    }

    /// Species distribution over the full, unfiltered table.
    pub fn species_pie(&mut self) -> &PieSpec {
        let Self { table, tracker, pie, .. } = self;
        pie.read(tracker, || chart::pie::build(table))
    }
}
