//! # Similarity Engine
//!
//! Wraps a [`RowScorer`] with the single-slot [`QueryCache`]:
//! 1. A query for the cached movie returns the cached row untouched
//! 2. Any other movie computes a fresh row and replaces the slot
//!
//! Lookups take `&mut self` because they may write the cache. Callers that
//! need to share an engine across threads must put it behind a lock; the
//! scorer itself is read-only.

use crate::cache::QueryCache;
use crate::error::{Result, SimilarityError};
use crate::matrix::SimilarityMatrix;
use crate::scorer::{LazyScorer, RowScorer, SimilarityStrategy};
use crate::types::SimilarityRow;
use data_loader::MovieIndex;
use pipeline::CountMatrix;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct SimilarityEngine {
    scorer: Box<dyn RowScorer>,
    cache: QueryCache,
    /// Rows produced by the scorer (cache misses)
    computed_rows: usize,
    cache_hits: usize,
}

impl SimilarityEngine {
    /// Create an engine over any scorer
    pub fn new(scorer: impl RowScorer + 'static) -> Self {
        Self {
            scorer: Box::new(scorer),
            cache: QueryCache::new(),
            computed_rows: 0,
            cache_hits: 0,
        }
    }

    /// Build the scorer the strategy asks for
    pub fn with_strategy(strategy: SimilarityStrategy, counts: CountMatrix) -> Self {
        match strategy {
            SimilarityStrategy::Eager => Self::new(SimilarityMatrix::compute(&counts)),
            SimilarityStrategy::Lazy => Self::new(LazyScorer::new(counts)),
        }
    }

    /// Similarity of every movie to `index`, served from the cache when
    /// `index` was also the previous query.
    #[instrument(skip(self), fields(scorer = self.scorer.name()))]
    pub fn similarity_row(&mut self, index: MovieIndex) -> Result<Arc<SimilarityRow>> {
        if let Some(row) = self.cache.get(index) {
            self.cache_hits += 1;
            debug!("Cache hit for movie {}", index);
            return Ok(row);
        }

        let scores = self
            .scorer
            .score_row(index)
            .ok_or(SimilarityError::IndexOutOfRange {
                index,
                len: self.scorer.len(),
            })?;
        self.computed_rows += 1;
        debug!("Cache miss for movie {}, row computed", index);

        let row = Arc::new(SimilarityRow::from_scores(index, scores));
        self.cache.store(Arc::clone(&row));
        Ok(row)
    }

    /// Score of a single pair; never touches the cache
    pub fn score(&self, a: MovieIndex, b: MovieIndex) -> Result<f32> {
        let len = self.scorer.len();
        self.scorer.score(a, b).ok_or(SimilarityError::IndexOutOfRange {
            index: a.max(b),
            len,
        })
    }

    /// Drop the cached row
    pub fn reset(&mut self) {
        self.cache.invalidate();
    }

    /// Number of rows computed so far (cache misses)
    pub fn computed_rows(&self) -> usize {
        self.computed_rows
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// Movie whose row is currently cached
    pub fn cached_index(&self) -> Option<MovieIndex> {
        self.cache.cached_index()
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    pub fn len(&self) -> usize {
        self.scorer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scorer.is_empty()
    }
}
