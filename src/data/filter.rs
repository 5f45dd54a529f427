use std::collections::BTreeSet;

use super::model::{PenguinTable, Species};

// ---------------------------------------------------------------------------
// Species filter
// ---------------------------------------------------------------------------

/// Return indices of rows whose species is in `selected`, preserving table
/// order.
///
/// An empty selection yields an empty view: nothing checked means nothing
/// shown, matching the checkbox-group semantics.
pub fn filtered_indices(table: &PenguinTable, selected: &BTreeSet<Species>) -> Vec<usize> {
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, penguin)| selected.contains(&penguin.species))
        .map(|(i, _)| i)
        .collect()
}
