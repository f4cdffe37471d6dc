use std::path::PathBuf;

use crate::data::model::FieldOrder;

/// Rating file read when no first path is given.
pub const DEFAULT_FIRST_FILE: &str = "rating1.txt";

/// Rating file read when no second path is given.
pub const DEFAULT_SECOND_FILE: &str = "rating2.txt";

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Inputs for one affinity computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinityConfig {
    /// First rating file.
    pub first: PathBuf,
    /// Second rating file.
    pub second: PathBuf,
    /// Line layout shared by both files.
    pub order: FieldOrder,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            first: PathBuf::from(DEFAULT_FIRST_FILE),
            second: PathBuf::from(DEFAULT_SECOND_FILE),
            order: FieldOrder::RatingFirst,
        }
    }
}

impl AffinityConfig {
    /// Build a config from optional overrides, falling back to the defaults.
    pub fn new(first: Option<PathBuf>, second: Option<PathBuf>, order: FieldOrder) -> Self {
        let defaults = Self::default();
        Self {
            first: first.unwrap_or(defaults.first),
            second: second.unwrap_or(defaults.second),
            order,
        }
    }
}
