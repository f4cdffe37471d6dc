use thiserror::Error;

use super::model::{RatingVector, RawRatings};

/// A rating token that is not a number, with or without its last character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a numeric rating: {value:?}")]
pub struct InvalidRating {
    pub value: String,
}

/// Interpret a rating token as a number.
///
/// The token is tried as-is first, then with its final character removed so
/// that `"42%"` reads as `42.0`. Surrounding whitespace is ignored.
pub fn parse_rating(value: &str) -> Result<f64, InvalidRating> {
    if let Ok(rating) = value.trim().parse::<f64>() {
        return Ok(rating);
    }

    let mut chars = value.chars();
    chars.next_back();
    chars.as_str().trim().parse::<f64>().map_err(|_| InvalidRating {
        value: value.to_string(),
    })
}

/// Convert raw ratings into a numeric vector.
///
/// Entries whose rating cannot be read are left out entirely; they do not
/// become zero.
pub fn clean(raw: &RawRatings) -> RatingVector {
    raw.iter()
        .filter_map(|(entry, value)| match parse_rating(value) {
            Ok(rating) => Some((entry.as_str(), rating)),
            Err(e) => {
                log::debug!("dropping {entry:?}: {e}");
                None
            }
        })
        .collect()
}
