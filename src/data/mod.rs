/// Data layer: rating types, file parsing, and value cleaning.
///
/// Architecture:
/// ```text
///   rating1.txt / rating2.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split each line at its first space → RawRatings
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  parse rating tokens, drop the rest → RatingVector
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ RatingVector  │  entry → f64, missing entries are zero
///   └──────────────┘
/// ```

pub mod clean;
pub mod loader;
pub mod model;
