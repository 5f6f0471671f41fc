//! Cosine similarity over sparse count vectors.
//!
//! cos(a, b) = (a . b) / (||a|| x ||b||)
//!
//! Count vectors are non-negative, so scores land in [0, 1]. A pair where
//! either vector has zero magnitude scores 0.0 rather than NaN.

use pipeline::CountVector;

/// Cosine similarity between two count vectors.
pub fn cosine_similarity(a: &CountVector, b: &CountVector) -> f32 {
    cosine_with_norms(a, a.norm(), b, b.norm())
}

/// Same as [`cosine_similarity`] with both norms already known.
pub(crate) fn cosine_with_norms(a: &CountVector, norm_a: f64, b: &CountVector, norm_b: f64) -> f32 {
    let denominator = norm_a * norm_b;
    if denominator == 0.0 {
        return 0.0;
    }
    // Clamp absorbs rounding like 1.0000001
    (a.dot(b) / denominator).clamp(0.0, 1.0) as f32
}

/// Fill `out` with the similarity of row `index` to every row.
///
/// The diagonal is pinned to 1.0, including rows with no tokens.
pub(crate) fn fill_row(index: usize, rows: &[CountVector], norms: &[f64], out: &mut [f32]) {
    let source = &rows[index];
    let source_norm = norms[index];
    for (other, slot) in out.iter_mut().enumerate() {
        *slot = if other == index {
            1.0
        } else {
            cosine_with_norms(source, source_norm, &rows[other], norms[other])
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::CountVectorizer;

    #[test]
    fn test_identical_vectors() {
        let matrix = CountVectorizer::new().fit_transform(&["war peace", "war peace"]);
        let score = cosine_similarity(matrix.row(0).unwrap(), matrix.row(1).unwrap());
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_overlap() {
        let matrix = CountVectorizer::new().fit_transform(&["k1 c1 g1 d1", "k1 c2 g1 d2"]);
        let score = cosine_similarity(matrix.row(0).unwrap(), matrix.row(1).unwrap());
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_vectors() {
        let matrix = CountVectorizer::new().fit_transform(&["space", "western"]);
        assert_eq!(
            cosine_similarity(matrix.row(0).unwrap(), matrix.row(1).unwrap()),
            0.0
        );
    }

    #[test]
    fn test_zero_magnitude_is_zero_not_nan() {
        let matrix = CountVectorizer::new().fit_transform(&["space", ""]);
        let empty = matrix.row(1).unwrap();

        assert_eq!(cosine_similarity(matrix.row(0).unwrap(), empty), 0.0);
        assert_eq!(cosine_similarity(empty, empty), 0.0);
    }

    #[test]
    fn test_fill_row_pins_diagonal() {
        let matrix = CountVectorizer::new().fit_transform(&["space", ""]);
        let norms: Vec<f64> = matrix.rows().iter().map(|r| r.norm()).collect();
        let mut out = vec![0.0; 2];

        fill_row(1, matrix.rows(), &norms, &mut out);
        assert_eq!(out, vec![0.0, 1.0]);
    }
}
