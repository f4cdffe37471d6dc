use crate::data::model::RatingVector;

// ---------------------------------------------------------------------------
// Sparse vector algebra over entry names
// ---------------------------------------------------------------------------

/// Dot product of two sparse vectors.
///
/// Walks the entries of `a` only; an entry missing from `b` contributes zero,
/// which is also why entries that exist only in `b` can be ignored.
pub fn dot(a: &RatingVector, b: &RatingVector) -> f64 {
    // fold from +0.0: `Sum` starts at -0.0, which prints as "-0.0000"
    a.iter()
        .filter_map(|(entry, x)| b.get(entry).map(|y| x * y))
        .fold(0.0, |acc, term| acc + term)
}

/// Euclidean length of a vector.
pub fn magnitude(v: &RatingVector) -> f64 {
    dot(v, v).sqrt()
}

/// Cosine of the angle between two rating vectors.
///
/// `1.0` means the ratings point the same way regardless of scale, `0.0`
/// means no overlap. There is no guard for zero-length vectors: if either
/// side is empty or all zeros the result is NaN (`0 / 0`), and callers decide
/// how to report it.
pub fn affinity(a: &RatingVector, b: &RatingVector) -> f64 {
    let numerator = dot(a, b);
    let denominator = (dot(a, a) * dot(b, b)).sqrt();

    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> RatingVector {
        pairs.iter().copied().collect()
    }

    #[test]
    fn dot_only_counts_shared_entries() {
        let a = vector(&[("a", 2.0), ("b", 3.0)]);
        let b = vector(&[("a", 4.0), ("c", 1.0)]);

        assert_eq!(dot(&a, &b), 8.0);
        assert_eq!(dot(&b, &a), 8.0);
    }

    #[test]
    fn dot_adds_terms_in_insertion_order() {
        // sorted order would give 1 + 1e16 - 1e16 == 0
        let a = vector(&[("b", 1e16), ("c", -1e16), ("a", 1.0)]);
        let ones = vector(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]);

        assert_eq!(dot(&a, &ones), 1.0);
    }

    #[test]
    fn magnitude_of_three_four_is_five() {
        let v = vector(&[("x", 3.0), ("y", 4.0)]);

        assert_eq!(magnitude(&v), 5.0);
    }

    #[test]
    fn affinity_of_vector_with_itself_is_one() {
        let v = vector(&[("a", 5.0), ("b", -3.0), ("c", 0.25)]);

        assert!((affinity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn affinity_ignores_scale() {
        let a = vector(&[("apple", 5.0), ("banana", 3.0)]);
        let b = vector(&[("apple", 10.0), ("banana", 6.0)]);

        assert!((affinity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn affinity_of_orthogonal_vectors_is_zero() {
        let a = vector(&[("a", 1.0)]);
        let b = vector(&[("b", 1.0)]);

        let score = affinity(&a, &b);
        assert_eq!(score, 0.0);
        assert!(score.is_sign_positive());
    }

    #[test]
    fn affinity_of_opposite_vectors_is_minus_one() {
        let a = vector(&[("a", 1.0), ("b", 2.0)]);
        let b = vector(&[("a", -1.0), ("b", -2.0)]);

        assert!((affinity(&a, &b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn affinity_with_empty_vector_is_nan() {
        let a = vector(&[("a", 1.0)]);
        let empty = RatingVector::new();

        assert!(affinity(&a, &empty).is_nan());
        assert!(affinity(&empty, &empty).is_nan());
    }

    #[test]
    fn affinity_with_all_zero_vector_is_nan() {
        let a = vector(&[("a", 1.0)]);
        let zeros = vector(&[("a", 0.0), ("b", 0.0)]);

        assert!(affinity(&a, &zeros).is_nan());
    }
}
