//! Ranking of a similarity row into recommendations.
//!
//! ## Algorithm
//! 1. Drop the queried movie itself
//! 2. Stable sort by score, highest first; the row is in index order, so
//!    equal scores stay in ascending index order
//! 3. Keep the first `top_k`

use data_loader::{MovieCatalog, MovieIndex};
use serde::Serialize;
use similarity::SimilarityRow;
use std::fmt;

/// One ranked, displayable result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub index: MovieIndex,
    pub title: String,
    pub score: f32,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Score: {:.2})", self.title, self.score)
    }
}

/// Rank `row`, excluding `exclude`, and return at most `top_k` results
pub fn rank(
    row: &SimilarityRow,
    exclude: MovieIndex,
    top_k: usize,
    catalog: &MovieCatalog,
) -> Vec<Recommendation> {
    let mut scored: Vec<_> = row.scores.iter().filter(|s| s.index != exclude).collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    scored
        .into_iter()
        .filter_map(|s| {
            catalog.title_of(s.index).map(|title| Recommendation {
                index: s.index,
                title: title.to_string(),
                score: s.score,
            })
        })
        .take(top_k)
        .collect()
}
