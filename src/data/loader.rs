use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{Penguin, PenguinTable, Sex, Species};

/// Bundled dataset asset. Regenerate with `cargo run --bin generate_sample`.
const PENGUINS_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("row {row}: unknown species '{value}'")]
    UnknownSpecies { row: usize, value: String },

    #[error("row {row}: unknown sex '{value}'")]
    UnknownSex { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("dataset has no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Raw record – the on-disk row shape before validation
// ---------------------------------------------------------------------------

/// One row as serde sees it. Species and sex arrive as strings and are
/// validated into their enums in a second step so that bad values produce a
/// typed [`DataError`] with a row number.
#[derive(Debug, Deserialize)]
struct RawRecord {
    species: String,
    island: String,
    bill_length_mm: Option<f64>,
    bill_depth_mm: Option<f64>,
    flipper_length_mm: Option<f64>,
    body_mass_g: Option<f64>,
    sex: Option<String>,
    year: i32,
}

impl RawRecord {
    fn into_penguin(self, row: usize) -> Result<Penguin, DataError> {
        let species: Species = self
            .species
            .parse()
            .map_err(|value| DataError::UnknownSpecies { row, value })?;

        // Empty cells deserialize as None; anything else must be a real value.
        let sex = match self.sex.as_deref() {
            None | Some("") => None,
            Some(s) => Some(
                s.parse::<Sex>()
                    .map_err(|value| DataError::UnknownSex { row, value })?,
            ),
        };

        Ok(Penguin {
            species,
            island: self.island,
            bill_length_mm: self.bill_length_mm,
            bill_depth_mm: self.bill_depth_mm,
            flipper_length_mm: self.flipper_length_mm,
            body_mass_g: self.body_mass_g,
            sex,
            year: self.year,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Load the dataset bundled into the binary. Called once at startup; the
/// resulting table is never mutated.
pub fn embedded_dataset() -> Result<PenguinTable, DataError> {
    from_csv_str(PENGUINS_CSV)
}

/// Load a dataset with the penguins schema from a file. Dispatch by
/// extension: `.csv` or `.json` (records-oriented).
pub fn load_file(path: &Path) -> Result<PenguinTable, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => from_csv_str(&std::fs::read_to_string(path)?),
        "json" => from_json_str(&std::fs::read_to_string(path)?),
        other => Err(DataError::UnsupportedExtension(other.to_string())),
    }
}

/// Parse a dataset from CSV text with the standard penguins header.
pub fn from_csv_str(text: &str) -> Result<PenguinTable, DataError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();

    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        rows.push(raw.into_penguin(row)?);
    }

    let table = PenguinTable::from_rows(rows);
    if table.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(table)
}

/// Parse a dataset from records-oriented JSON:
/// `[{"species": "Adelie", "island": "Biscoe", ... }, ...]`.
pub fn from_json_str(text: &str) -> Result<PenguinTable, DataError> {
    let records: Vec<RawRecord> = serde_json::from_str(text)?;

    let mut rows = Vec::with_capacity(records.len());
    for (row, raw) in records.into_iter().enumerate() {
        rows.push(raw.into_penguin(row)?);
    }

    let table = PenguinTable::from_rows(rows);
    if table.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(table)
}
