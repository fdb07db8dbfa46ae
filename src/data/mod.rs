/// Data layer: core types, loading, and derived series.
///
/// Architecture:
/// ```text
///  cache_access_speed.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + sort by bytes → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Sample>, ascending working-set size
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ transform   │  x_kib / warm_eff / cold_eff → DerivedSeries
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;
