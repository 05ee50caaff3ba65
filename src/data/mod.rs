/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AuditDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AuditDataset  │  Vec<Record>, unique-value lists
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply column selections → filtered indices
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
