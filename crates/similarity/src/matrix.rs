//! Dense all-pairs similarity matrix.
//!
//! ## Performance Note
//! Rows are filled in parallel with Rayon. Memory is n² f32 values, which is
//! fine for catalogs of a few thousand movies; larger catalogs should use
//! the lazy strategy instead.

use crate::cosine::fill_row;
use crate::scorer::RowScorer;
use data_loader::MovieIndex;
use pipeline::CountMatrix;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{info, instrument};

/// Square, symmetric matrix of cosine scores with a diagonal of 1.0.
///
/// Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    /// Row-major, `size * size` entries
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute every pairwise score.
    #[instrument(skip_all, fields(movies = counts.n_rows()))]
    pub fn compute(counts: &CountMatrix) -> Self {
        let start = Instant::now();
        let size = counts.n_rows();
        let mut scores = vec![0.0f32; size * size];

        if size > 0 {
            let rows = counts.rows();
            let norms: Vec<f64> = rows.par_iter().map(|row| row.norm()).collect();
            scores
                .par_chunks_mut(size)
                .enumerate()
                .for_each(|(index, out)| fill_row(index, rows, &norms, out));
        }

        info!(
            "Computed {}x{} similarity matrix in {:?}",
            size,
            size,
            start.elapsed()
        );
        Self { size, scores }
    }

    /// Number of movies (rows == columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow one row
    pub fn row(&self, index: MovieIndex) -> Option<&[f32]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }

    /// Score at `[a][b]`
    pub fn get(&self, a: MovieIndex, b: MovieIndex) -> Option<f32> {
        if b >= self.size {
            return None;
        }
        self.row(a).map(|row| row[b])
    }
}

impl RowScorer for SimilarityMatrix {
    fn name(&self) -> &str {
        "SimilarityMatrix"
    }

    fn len(&self) -> usize {
        self.size
    }

    fn score_row(&self, index: MovieIndex) -> Option<Vec<f32>> {
        self.row(index).map(<[f32]>::to_vec)
    }

    fn score(&self, a: MovieIndex, b: MovieIndex) -> Option<f32> {
        self.get(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::LazyScorer;
    use pipeline::CountVectorizer;

    fn counts() -> CountMatrix {
        CountVectorizer::new().fit_transform(&[
            "space war hero",
            "space hero hero",
            "romance paris",
            "",
            "war romance",
        ])
    }

    #[test]
    fn test_diagonal_is_one() {
        let matrix = SimilarityMatrix::compute(&counts());
        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), Some(1.0));
        }
    }

    #[test]
    fn test_symmetric() {
        let matrix = SimilarityMatrix::compute(&counts());
        for i in 0..matrix.size() {
            for j in 0..matrix.size() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_scores_in_unit_range() {
        let matrix = SimilarityMatrix::compute(&counts());
        for i in 0..matrix.size() {
            for &score in matrix.row(i).unwrap() {
                assert!((0.0..=1.0).contains(&score));
            }
        }
        // Empty document is dissimilar to everything but itself
        assert_eq!(matrix.get(3, 0), Some(0.0));
    }

    #[test]
    fn test_matches_lazy_scorer() {
        let counts = counts();
        let eager = SimilarityMatrix::compute(&counts);
        let lazy = LazyScorer::new(counts);

        for i in 0..eager.size() {
            assert_eq!(eager.score_row(i), lazy.score_row(i));
        }
    }

    #[test]
    fn test_empty_corpus() {
        let matrix = SimilarityMatrix::compute(&CountMatrix::default());
        assert_eq!(matrix.size(), 0);
        assert!(matrix.row(0).is_none());
        assert!(RowScorer::is_empty(&matrix));
    }
}
