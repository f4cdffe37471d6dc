use std::fmt;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// FieldOrder – which side of the delimiter holds the rating
// ---------------------------------------------------------------------------

/// Layout of a single line in a rating file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOrder {
    /// `"<rating> <entry>"`, e.g. `"4.5 The Left Hand of Darkness"`.
    #[default]
    RatingFirst,
    /// `"<entry> <rating>"`, e.g. `"apple 3.5"`.
    EntryFirst,
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldOrder::RatingFirst => write!(f, "rating-first"),
            FieldOrder::EntryFirst => write!(f, "entry-first"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawRatings – parser output, values still text
// ---------------------------------------------------------------------------

/// Entry name → rating token exactly as it appeared in the file.
///
/// Keeps first-seen order; a repeated entry updates its value in place.
pub type RawRatings = IndexMap<String, String>;

// ---------------------------------------------------------------------------
// RatingVector – cleaned numeric ratings
// ---------------------------------------------------------------------------

/// A sparse vector indexed by entry name.
///
/// Entries missing from the map are an implicit zero component. Every stored
/// value was parsed from the rating file; nothing is defaulted. Entries keep
/// the order they were first read in, so sums run in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingVector {
    components: IndexMap<String, f64>,
}

impl RatingVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rating for `entry`, replacing any previous value.
    pub fn insert(&mut self, entry: impl Into<String>, rating: f64) {
        self.components.insert(entry.into(), rating);
    }

    /// Rating for `entry`, or `None` when the entry is absent (implicit zero).
    pub fn get(&self, entry: &str) -> Option<f64> {
        self.components.get(entry).copied()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.components.contains_key(entry)
    }

    /// Iterate `(entry, rating)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.components.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of explicitly stored entries.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of entries present in both vectors.
    pub fn shared_entries(&self, other: &RatingVector) -> usize {
        self.components
            .keys()
            .filter(|k| other.contains(k))
            .count()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RatingVector {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut vector = RatingVector::new();
        for (entry, rating) in iter {
            vector.insert(entry, rating);
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_previous_rating() {
        let mut v = RatingVector::new();
        v.insert("apple", 1.0);
        v.insert("apple", 2.5);

        assert_eq!(v.len(), 1);
        assert_eq!(v.get("apple"), Some(2.5));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut v = RatingVector::new();
        v.insert("zebra", 1.0);
        v.insert("apple", 2.0);
        v.insert("mango", 3.0);
        v.insert("zebra", 4.0);

        let entries: Vec<_> = v.iter().collect();
        assert_eq!(entries, vec![("zebra", 4.0), ("apple", 2.0), ("mango", 3.0)]);
    }

    #[test]
    fn missing_entry_is_none() {
        let v: RatingVector = [("apple", 1.0)].into_iter().collect();

        assert!(v.contains("apple"));
        assert_eq!(v.get("banana"), None);
    }

    #[test]
    fn shared_entries_counts_overlap_only() {
        let a: RatingVector = [("a", 1.0), ("b", 2.0), ("c", 3.0)].into_iter().collect();
        let b: RatingVector = [("b", 1.0), ("c", 1.0), ("d", 1.0)].into_iter().collect();

        assert_eq!(a.shared_entries(&b), 2);
        assert_eq!(b.shared_entries(&a), 2);
    }

    #[test]
    fn default_order_is_rating_first() {
        assert_eq!(FieldOrder::default(), FieldOrder::RatingFirst);
        assert_eq!(FieldOrder::EntryFirst.to_string(), "entry-first");
    }
}
