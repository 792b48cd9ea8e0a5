/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///    latest.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (header + raw records)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Dataset, value column index, numeric coercion
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  numeric predicates → kept values / row indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
