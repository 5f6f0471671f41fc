//! Result types shared by the scorers, the cache and the engine.

use data_loader::MovieIndex;

/// Similarity of one other movie to the queried one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMovie {
    pub index: MovieIndex,
    pub score: f32,
}

/// Similarity of every movie to `source`, ordered by movie index.
///
/// Includes `source` itself with a score of 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityRow {
    pub source: MovieIndex,
    pub scores: Vec<ScoredMovie>,
}

impl SimilarityRow {
    /// Wrap a dense score vector where position == movie index
    pub fn from_scores(source: MovieIndex, scores: Vec<f32>) -> Self {
        Self {
            source,
            scores: scores
                .into_iter()
                .enumerate()
                .map(|(index, score)| ScoredMovie { index, score })
                .collect(),
        }
    }

    /// Score of a given movie in this row
    pub fn score_of(&self, index: MovieIndex) -> Option<f32> {
        self.scores.get(index).map(|s| s.score)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
