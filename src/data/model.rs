use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Species – the three penguin species in the dataset
// ---------------------------------------------------------------------------

/// Penguin species. The dataset carries exactly these three values, so the
/// column is a closed enum rather than a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    /// All species, in the order used for chart series and count arrays.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Chinstrap, Species::Gentoo];

    /// Position of this species in [`Species::ALL`].
    pub fn index(self) -> usize {
        match self {
            Species::Adelie => 0,
            Species::Chinstrap => 1,
            Species::Gentoo => 2,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Chinstrap" => Ok(Species::Chinstrap),
            "Gentoo" => Ok(Species::Gentoo),
            other => Err(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

/// Recorded sex of a penguin. Missing in a handful of rows, hence the
/// `Option<Sex>` in [`Penguin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sex::Male => "male",
            Sex::Female => "female",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// NumericColumn – the four measured attributes a chart can plot
// ---------------------------------------------------------------------------

/// The measurement columns selectable as a chart attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 4] = [
        NumericColumn::BillLength,
        NumericColumn::BillDepth,
        NumericColumn::FlipperLength,
        NumericColumn::BodyMass,
    ];

    /// Column name as it appears in the dataset header.
    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::BillLength => "bill_length_mm",
            NumericColumn::BillDepth => "bill_depth_mm",
            NumericColumn::FlipperLength => "flipper_length_mm",
            NumericColumn::BodyMass => "body_mass_g",
        }
    }

    /// Read this column from a row. `None` when the measurement is missing.
    pub fn value(self, penguin: &Penguin) -> Option<f64> {
        match self {
            NumericColumn::BillLength => penguin.bill_length_mm,
            NumericColumn::BillDepth => penguin.bill_depth_mm,
            NumericColumn::FlipperLength => penguin.flipper_length_mm,
            NumericColumn::BodyMass => penguin.body_mass_g,
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the source table
// ---------------------------------------------------------------------------

/// A single penguin observation (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
    pub year: i32,
}

// ---------------------------------------------------------------------------
// PenguinTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct PenguinTable {
    rows: Vec<Penguin>,
}

impl PenguinTable {
    /// Column names in table order, matching the dataset header.
    pub const COLUMNS: [&'static str; 8] = [
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
        "sex",
        "year",
    ];

    pub fn from_rows(rows: Vec<Penguin>) -> Self {
        PenguinTable { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in original order.
    pub fn rows(&self) -> &[Penguin] {
        &self.rows
    }

    /// Per-species row counts, in [`Species::ALL`] order.
    pub fn species_counts(&self) -> [(Species, usize); 3] {
        let mut counts = [0usize; 3];
        for row in &self.rows {
            counts[row.species.index()] += 1;
        }
        [
            (Species::Adelie, counts[0]),
            (Species::Chinstrap, counts[1]),
            (Species::Gentoo, counts[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penguin(species: Species) -> Penguin {
        Penguin {
            species,
            island: "Dream".to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(195.0),
            body_mass_g: Some(3800.0),
            sex: Some(Sex::Female),
            year: 2008,
        }
    }

    #[test]
    fn species_parse_round_trip() {
        for species in Species::ALL {
            let parsed: Species = species.to_string().parse().unwrap();
            assert_eq!(parsed, species);
        }
        assert!("Emperor".parse::<Species>().is_err());
    }

    #[test]
    fn sex_parses_case_insensitively() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("FEMALE".parse::<Sex>().unwrap(), Sex::Female);
        assert!("unknown".parse::<Sex>().is_err());
    }

    #[test]
    fn numeric_column_reads_the_right_field() {
        let mut p = penguin(Species::Adelie);
        p.body_mass_g = Some(4250.0);
        p.flipper_length_mm = None;

        assert_eq!(NumericColumn::BodyMass.value(&p), Some(4250.0));
        assert_eq!(NumericColumn::FlipperLength.value(&p), None);
        assert_eq!(NumericColumn::BillLength.value(&p), Some(40.0));
    }

    #[test]
    fn species_counts_tally_rows() {
        let table = PenguinTable::from_rows(vec![
            penguin(Species::Adelie),
            penguin(Species::Gentoo),
            penguin(Species::Adelie),
            penguin(Species::Chinstrap),
            penguin(Species::Adelie),
            penguin(Species::Gentoo),
        ]);
        assert_eq!(
            table.species_counts(),
            [
                (Species::Adelie, 3),
                (Species::Chinstrap, 1),
                (Species::Gentoo, 2),
            ]
        );
    }
}
