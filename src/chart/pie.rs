use crate::data::model::{PenguinTable, Species};

// ---------------------------------------------------------------------------
// Species pie description
// ---------------------------------------------------------------------------

/// One slice: a species and its share of the whole population.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub species: Species,
    pub count: usize,
    pub fraction: f64,
}

/// Species distribution over the complete source table. Built from the
/// unfiltered table: the pie shows the full population no matter what the
/// species filter currently selects.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub total: usize,
    pub slices: Vec<PieSlice>,
}

/// Aggregate species counts over the complete table.
pub fn build(table: &PenguinTable) -> PieSpec {
    let total = table.len();
    let slices = table
        .species_counts()
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(species, count)| PieSlice {
            species,
            count,
            fraction: count as f64 / total as f64,
        })
        .collect();

    PieSpec { total, slices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn penguin(species: Species) -> Penguin {
        Penguin {
            species,
            island: "Torgersen".to_string(),
            bill_length_mm: Some(39.0),
            bill_depth_mm: Some(18.5),
            flipper_length_mm: Some(190.0),
            body_mass_g: Some(3650.0),
            sex: None,
            year: 2007,
        }
    }

    #[test]
    fn slices_report_full_population_counts() {
        let table = PenguinTable::from_rows(vec![
            penguin(Species::Adelie),
            penguin(Species::Adelie),
            penguin(Species::Gentoo),
            penguin(Species::Adelie),
            penguin(Species::Chinstrap),
            penguin(Species::Gentoo),
        ]);
        let spec = build(&table);

        assert_eq!(spec.total, 6);
        assert_eq!(spec.slices.len(), 3);
        assert_eq!(spec.slices[0].count, 3); // Adelie
        assert_eq!(spec.slices[1].count, 1); // Chinstrap
        assert_eq!(spec.slices[2].count, 2); // Gentoo
    }

    #[test]
    fn fractions_sum_to_one() {
        let table = PenguinTable::from_rows(vec![
            penguin(Species::Adelie),
            penguin(Species::Gentoo),
            penguin(Species::Gentoo),
        ]);
        let total: f64 = build(&table).slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn absent_species_get_no_slice() {
        let table = PenguinTable::from_rows(vec![penguin(Species::Gentoo)]);
        let spec = build(&table);
        assert_eq!(spec.slices.len(), 1);
        assert_eq!(spec.slices[0].species, Species::Gentoo);
    }

    #[test]
    fn empty_table_yields_no_slices() {
        let spec = build(&PenguinTable::from_rows(Vec::new()));
        assert_eq!(spec.total, 0);
        assert!(spec.slices.is_empty());
    }
}
