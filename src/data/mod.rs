/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PurchaseDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PurchaseDataset │  Vec<Record>, column index
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply attribute predicates → filtered indices
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
