/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  assets/penguins.csv (bundled)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV/JSON → PenguinTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PenguinTable  │  Vec<Penguin>, immutable after load
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species selection → filtered row indices
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
