/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, derive month/day/hour → TripTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ TripTable  │  header row + Vec<Trip>
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month filter, then day filter → filtered TripTable
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
