//! Row scoring strategies.
//!
//! A [`RowScorer`] answers "how similar is every movie to movie `i`".
//! The eager scorer is [`SimilarityMatrix`](crate::SimilarityMatrix); the
//! lazy one below recomputes a row from the count vectors on each call.

use crate::cosine::{cosine_with_norms, fill_row};
use data_loader::MovieIndex;
use pipeline::CountMatrix;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Source of similarity rows.
///
/// `Send + Sync` so a scorer can sit behind shared, read-only state.
pub trait RowScorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Number of movies covered
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dense scores of `index` against every movie, position == movie index.
    ///
    /// `None` when `index` is out of range.
    fn score_row(&self, index: MovieIndex) -> Option<Vec<f32>>;

    /// Score of a single pair, `None` when either index is out of range
    fn score(&self, a: MovieIndex, b: MovieIndex) -> Option<f32>;
}

/// How the engine obtains similarity rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityStrategy {
    /// Precompute the full matrix at startup
    #[default]
    Eager,
    /// Compute each row on demand from the count vectors
    Lazy,
}

impl fmt::Display for SimilarityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityStrategy::Eager => f.write_str("eager"),
            SimilarityStrategy::Lazy => f.write_str("lazy"),
        }
    }
}

impl FromStr for SimilarityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(SimilarityStrategy::Eager),
            "lazy" => Ok(SimilarityStrategy::Lazy),
            other => Err(format!("unknown similarity strategy {:?} (expected eager or lazy)", other)),
        }
    }
}

/// Computes rows on demand.
///
/// Holds the count vectors and their norms; a row costs one pass over all
/// movies, which the engine's cache amortizes for repeated queries.
pub struct LazyScorer {
    counts: CountMatrix,
    norms: Vec<f64>,
}

impl LazyScorer {
    pub fn new(counts: CountMatrix) -> Self {
        let norms = counts.rows().par_iter().map(|row| row.norm()).collect();
        Self { counts, norms }
    }

    pub fn counts(&self) -> &CountMatrix {
        &self.counts
    }
}

impl RowScorer for LazyScorer {
    fn name(&self) -> &str {
        "LazyScorer"
    }

    fn len(&self) -> usize {
        self.counts.n_rows()
    }

    fn score_row(&self, index: MovieIndex) -> Option<Vec<f32>> {
        if index >= self.len() {
            return None;
        }
        debug!("Computing similarity row {} on demand", index);
        let mut out = vec![0.0; self.len()];
        fill_row(index, self.counts.rows(), &self.norms, &mut out);
        Some(out)
    }

    fn score(&self, a: MovieIndex, b: MovieIndex) -> Option<f32> {
        let rows = self.counts.rows();
        if a >= rows.len() || b >= rows.len() {
            return None;
        }
        if a == b {
            return Some(1.0);
        }
        Some(cosine_with_norms(&rows[a], self.norms[a], &rows[b], self.norms[b]))
    }
}
