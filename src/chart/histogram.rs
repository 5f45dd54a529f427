use crate::data::model::{NumericColumn, PenguinTable, Species};

use super::ChartError;

// ---------------------------------------------------------------------------
// Histogram description
// ---------------------------------------------------------------------------

/// How the per-species bars within one bin are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarLayout {
    /// Species bars stacked on top of each other per bin.
    Stacked,
    /// Species bars side by side per bin.
    Grouped,
}

/// One histogram bin with per-species counts in [`Species::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub counts: [usize; 3],
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Renderer-independent histogram of one measurement column over a view.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    pub column: NumericColumn,
    pub layout: BarLayout,
    pub bins: Vec<HistogramBin>,
}

impl HistogramSpec {
    /// Total number of counted values across all bins and species.
    pub fn total_count(&self) -> usize {
        self.bins
            .iter()
            .map(|bin| bin.counts.iter().sum::<usize>())
            .sum()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build a histogram of `column` over the rows named by `view`.
///
/// Rows with a missing value for `column` are skipped. A view with no
/// present values yields an empty spec (drawn as "no data", not an error);
/// a zero bin count is a configuration error.
pub fn build(
    table: &PenguinTable,
    view: &[usize],
    column: NumericColumn,
    bin_count: u32,
    layout: BarLayout,
) -> Result<HistogramSpec, ChartError> {
    if bin_count == 0 {
        return Err(ChartError::InvalidBinCount(bin_count));
    }

    let values: Vec<(f64, Species)> = view
        .iter()
        .filter_map(|&i| {
            let penguin = &table.rows()[i];
            column.value(penguin).map(|v| (v, penguin.species))
        })
        .collect();

    if values.is_empty() {
        return Ok(HistogramSpec {
            column,
            layout,
            bins: Vec::new(),
        });
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(v, _) in &values {
        min = min.min(v);
        max = max.max(v);
    }

    let n = bin_count as usize;
    // Degenerate range (all values identical): nominal unit-wide bins.
    let range = max - min;
    let width = if range > 0.0 { range / n as f64 } else { 1.0 };

    let mut bins: Vec<HistogramBin> = (0..n)
        .map(|i| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            counts: [0; 3],
        })
        .collect();

    for (v, species) in values {
        // The maximum value falls on the last bin's upper edge; clamp it in.
        let idx = (((v - min) / width) as usize).min(n - 1);
        bins[idx].counts[species.index()] += 1;
    }

    Ok(HistogramSpec {
        column,
        layout,
        bins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn penguin(species: Species, bill_length: Option<f64>) -> Penguin {
        Penguin {
            species,
            island: "Biscoe".to_string(),
            bill_length_mm: bill_length,
            bill_depth_mm: Some(17.0),
            flipper_length_mm: Some(210.0),
            body_mass_g: Some(4500.0),
            sex: None,
            year: 2007,
        }
    }

    fn table_with_bills(bills: &[(Species, Option<f64>)]) -> PenguinTable {
        PenguinTable::from_rows(
            bills
                .iter()
                .map(|&(species, bill)| penguin(species, bill))
                .collect(),
        )
    }

    #[test]
    fn zero_bin_count_is_rejected() {
        let table = table_with_bills(&[(Species::Adelie, Some(40.0))]);
        let result = build(&table, &[0], NumericColumn::BillLength, 0, BarLayout::Stacked);
        assert_eq!(result, Err(ChartError::InvalidBinCount(0)));
    }

    #[test]
    fn counts_sum_to_the_present_values() {
        let table = table_with_bills(&[
            (Species::Adelie, Some(38.0)),
            (Species::Adelie, Some(39.5)),
            (Species::Gentoo, Some(47.0)),
            (Species::Chinstrap, None), // missing value is skipped
            (Species::Gentoo, Some(50.0)),
        ]);
        let view: Vec<usize> = (0..table.len()).collect();
        let spec = build(&table, &view, NumericColumn::BillLength, 6, BarLayout::Stacked).unwrap();

        assert_eq!(spec.total_count(), 4);
        assert_eq!(spec.bins.len(), 6);
    }

    #[test]
    fn maximum_value_lands_in_the_last_bin() {
        let table = table_with_bills(&[
            (Species::Adelie, Some(10.0)),
            (Species::Adelie, Some(20.0)),
        ]);
        let spec = build(&table, &[0, 1], NumericColumn::BillLength, 5, BarLayout::Grouped).unwrap();

        assert_eq!(spec.bins[0].counts[Species::Adelie.index()], 1);
        assert_eq!(spec.bins[4].counts[Species::Adelie.index()], 1);
    }

    #[test]
    fn identical_values_fall_into_one_bin() {
        let table = table_with_bills(&[
            (Species::Gentoo, Some(46.0)),
            (Species::Gentoo, Some(46.0)),
            (Species::Gentoo, Some(46.0)),
        ]);
        let spec = build(&table, &[0, 1, 2], NumericColumn::BillLength, 10, BarLayout::Stacked)
            .unwrap();

        assert_eq!(spec.bins[0].counts[Species::Gentoo.index()], 3);
        assert_eq!(spec.total_count(), 3);
    }

    #[test]
    fn empty_view_produces_an_empty_spec() {
        let table = table_with_bills(&[(Species::Adelie, Some(40.0))]);
        let spec = build(&table, &[], NumericColumn::BillLength, 45, BarLayout::Stacked).unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn species_are_counted_separately_per_bin() {
        // Two values in the same bin, different species.
        let table = table_with_bills(&[
            (Species::Adelie, Some(40.0)),
            (Species::Chinstrap, Some(40.2)),
            (Species::Gentoo, Some(49.8)),
        ]);
        let spec = build(&table, &[0, 1, 2], NumericColumn::BillLength, 2, BarLayout::Stacked)
            .unwrap();

        assert_eq!(spec.bins[0].counts, [1, 1, 0]);
        assert_eq!(spec.bins[1].counts, [0, 0, 1]);
    }
}
