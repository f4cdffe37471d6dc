use std::io::Write;

use anyhow::{Context, Result};

use crate::config::AffinityConfig;
use crate::data::clean::clean;
use crate::data::loader::parse;
use crate::data::model::RatingVector;
use crate::vector::{affinity, magnitude};

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Load both rating files, compare them, and write the result line to `out`.
///
/// Returns the raw affinity (a cosine, not a percentage).
pub fn run(config: &AffinityConfig, out: &mut impl Write) -> Result<f64> {
    let first = load_vector(config, &config.first)?;
    let second = load_vector(config, &config.second)?;

    log::info!(
        "Comparing {} and {} rated entries ({} shared)",
        first.len(),
        second.len(),
        first.shared_entries(&second)
    );

    log::debug!(
        "Vector magnitudes: {} and {}",
        magnitude(&first),
        magnitude(&second)
    );

    let score = affinity(&first, &second);
    if first.is_empty() || second.is_empty() {
        log::warn!("Affinity is undefined: a rating file has no numeric entries");
    } else if !score.is_finite() {
        log::warn!("Affinity is not finite: check for zero-length vectors or nan/inf ratings");
    }

    writeln!(out, "{}", format_affinity(score)).context("writing affinity")?;
    Ok(score)
}

fn load_vector(config: &AffinityConfig, path: &std::path::Path) -> Result<RatingVector> {
    let raw = parse(path, config.order)?;
    let vector = clean(&raw);
    if vector.len() < raw.len() {
        log::info!(
            "Dropped {} non-numeric ratings from {}",
            raw.len() - vector.len(),
            path.display()
        );
    }
    Ok(vector)
}

/// Render an affinity as the percentage sentence printed to the user.
///
/// An undefined affinity prints as `nan`; infinities print as `inf`/`-inf`.
pub fn format_affinity(score: f64) -> String {
    let percent = score * 100.0;
    if percent.is_nan() {
        return "The affinity is nan%.".to_string();
    }
    format!("The affinity is {percent:.4}%.")
}
