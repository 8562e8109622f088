/// Data layer: core types and CSV loading.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  named columns, rows of typed cells
///   └──────────┘
///        │
///        ▼
///   analysis::analyze  (derived columns + regression)
/// ```

pub mod loader;
pub mod model;
