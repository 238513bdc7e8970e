/// Data layer: core types, loading, filter catalogs, and filtering.
///
/// Architecture:
/// ```text
///  dados_analisados.csv   HORA.csv
///           │                │
///           ▼                ▼
///      ┌─────────────────────────┐
///      │         loader          │  parse + coerce dates → Dataset
///      │     (DatasetCache)      │  compute once per process
///      └─────────────────────────┘
///                   │
///                   ▼
///      ┌─────────────────────────┐
///      │         catalog         │  available dates / supervisors
///      └─────────────────────────┘
///                   │
///                   ▼
///      ┌─────────────────────────┐
///      │         filter          │  apply selection → filtered indices
///      └─────────────────────────┘
/// ```

pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
