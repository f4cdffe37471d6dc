use std::path::Path;

use anyhow::{Context, Result};

use super::model::{FieldOrder, RawRatings};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a rating file into an entry → rating-token mapping.
///
/// Each line is trimmed and split at its first space. With
/// [`FieldOrder::RatingFirst`] the text before the space is the rating and
/// the rest of the line is the entry name, so `"3.5 red apple"` yields
/// `{"red apple": "3.5"}`. Lines without a space are skipped and later lines
/// overwrite earlier ones for the same entry.
pub fn parse(path: &Path, order: FieldOrder) -> Result<RawRatings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading rating file {}", path.display()))?;

    let ratings = parse_str(&text, order);
    log::info!(
        "Parsed {} entries from {} ({order})",
        ratings.len(),
        path.display()
    );
    Ok(ratings)
}

/// Same rules as [`parse`], applied to text already in memory.
pub fn parse_str(text: &str, order: FieldOrder) -> RawRatings {
    let mut ratings = RawRatings::new();

    for (line_no, line) in text.lines().enumerate() {
        match split_line(line, order) {
            Some((entry, rating)) => {
                ratings.insert(entry.to_string(), rating.to_string());
            }
            None => {
                if !line.trim().is_empty() {
                    log::debug!("line {}: no delimiter, skipped: {line:?}", line_no + 1);
                }
            }
        }
    }

    ratings
}

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Split one line into `(entry, rating)`.
///
/// Only the first ASCII space delimits; any further spaces stay in the
/// second token. Returns `None` for blank lines and lines without a space.
pub fn split_line(line: &str, order: FieldOrder) -> Option<(&str, &str)> {
    let line = line.trim();
    let index = line.find(' ')?;
    let (prefix, suffix) = (&line[..index], &line[index + 1..]);

    match order {
        FieldOrder::RatingFirst => Some((suffix, prefix)),
        FieldOrder::EntryFirst => Some((prefix, suffix)),
    }
}
