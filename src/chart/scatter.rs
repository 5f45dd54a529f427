use crate::data::model::{NumericColumn, PenguinTable, Species};

// ---------------------------------------------------------------------------
// Scatter description
// ---------------------------------------------------------------------------

/// One per-species point series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub points: Vec<[f64; 2]>,
}

/// Renderer-independent scatter plot: the selected attribute on the x axis
/// against bill length on the y axis, one series per species.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub x_column: NumericColumn,
    pub y_column: NumericColumn,
    pub series: Vec<ScatterSeries>,
}

impl ScatterSpec {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Build the scatter plot over the rows named by `view`. Rows missing either
/// coordinate are skipped; species with no remaining points get no series.
pub fn build(table: &PenguinTable, view: &[usize], x_column: NumericColumn) -> ScatterSpec {
    let y_column = NumericColumn::BillLength;

    let mut per_species: [Vec<[f64; 2]>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for &i in view {
        let penguin = &table.rows()[i];
        if let (Some(x), Some(y)) = (x_column.value(penguin), y_column.value(penguin)) {
            per_species[penguin.species.index()].push([x, y]);
        }
    }

    let series = Species::ALL
        .into_iter()
        .zip(per_species)
        .filter(|(_, points)| !points.is_empty())
        .map(|(species, points)| ScatterSeries { species, points })
        .collect();

    ScatterSpec {
        x_column,
        y_column,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn penguin(species: Species, mass: Option<f64>, bill: Option<f64>) -> Penguin {
        Penguin {
            species,
            island: "Dream".to_string(),
            bill_length_mm: bill,
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(195.0),
            body_mass_g: mass,
            sex: None,
            year: 2008,
        }
    }

    #[test]
    fn rows_missing_either_coordinate_are_skipped() {
        let table = PenguinTable::from_rows(vec![
            penguin(Species::Adelie, Some(3700.0), Some(39.0)),
            penguin(Species::Adelie, None, Some(38.0)),
            penguin(Species::Adelie, Some(3600.0), None),
        ]);
        let spec = build(&table, &[0, 1, 2], NumericColumn::BodyMass);

        assert_eq!(spec.point_count(), 1);
        assert_eq!(spec.series[0].points, vec![[3700.0, 39.0]]);
    }

    #[test]
    fn series_are_grouped_by_species() {
        let table = PenguinTable::from_rows(vec![
            penguin(Species::Gentoo, Some(5000.0), Some(46.0)),
            penguin(Species::Adelie, Some(3700.0), Some(39.0)),
            penguin(Species::Gentoo, Some(5200.0), Some(48.0)),
        ]);
        let spec = build(&table, &[0, 1, 2], NumericColumn::BodyMass);

        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].species, Species::Adelie);
        assert_eq!(spec.series[0].points.len(), 1);
        assert_eq!(spec.series[1].species, Species::Gentoo);
        assert_eq!(spec.series[1].points.len(), 2);
    }

    #[test]
    fn x_axis_follows_the_selected_attribute() {
        let table = PenguinTable::from_rows(vec![penguin(
            Species::Chinstrap,
            Some(3800.0),
            Some(49.0),
        )]);

        let spec = build(&table, &[0], NumericColumn::BillDepth);
        assert_eq!(spec.x_column, NumericColumn::BillDepth);
        assert_eq!(spec.series[0].points, vec![[18.0, 49.0]]);
    }

    #[test]
    fn empty_view_has_no_series() {
        let table = PenguinTable::from_rows(vec![penguin(
            Species::Adelie,
            Some(3700.0),
            Some(39.0),
        )]);
        assert!(build(&table, &[], NumericColumn::BodyMass).is_empty());
    }
}
