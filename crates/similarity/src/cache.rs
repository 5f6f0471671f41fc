//! Single-slot query cache.
//!
//! Holds the similarity row of the most recently queried movie. Capacity is
//! exactly one: storing a row for a different movie evicts the previous one.

use crate::types::SimilarityRow;
use data_loader::MovieIndex;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct QueryCache {
    slot: Option<Arc<SimilarityRow>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached row for `index`, if it is the one in the slot
    pub fn get(&self, index: MovieIndex) -> Option<Arc<SimilarityRow>> {
        self.slot
            .as_ref()
            .filter(|row| row.source == index)
            .map(Arc::clone)
    }

    /// Replace whatever is cached with `row`
    pub fn store(&mut self, row: Arc<SimilarityRow>) {
        self.slot = Some(row);
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Index of the movie currently cached
    pub fn cached_index(&self) -> Option<MovieIndex> {
        self.slot.as_ref().map(|row| row.source)
    }
}
