//! Tunables for building and querying the recommender.

use data_loader::FeatureField;
use pipeline::DEFAULT_MIN_TOKEN_LEN;
use similarity::SimilarityStrategy;

/// Recommendations returned per query
pub const DEFAULT_TOP_K: usize = 20;

/// "Did you mean" titles offered when a query has no exact match
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Titles offered while the user is still typing
pub const DEFAULT_LIVE_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommenderConfig {
    pub top_k: usize,
    pub suggestion_limit: usize,
    pub live_suggestion_limit: usize,
    pub strategy: SimilarityStrategy,
    pub min_token_len: usize,
    /// Fields combined into the text that gets vectorized, in order
    pub fields: Vec<FeatureField>,
}

impl RecommenderConfig {
    pub fn new() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            live_suggestion_limit: DEFAULT_LIVE_SUGGESTION_LIMIT,
            strategy: SimilarityStrategy::default(),
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            fields: FeatureField::ALL.to_vec(),
        }
    }

    /// Configure recommendations per query (default: 20)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Configure "did you mean" suggestions on a miss (default: 5)
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Configure prefix completions (default: 10)
    pub fn with_live_suggestion_limit(mut self, limit: usize) -> Self {
        self.live_suggestion_limit = limit;
        self
    }

    /// Configure eager matrix or lazy rows (default: eager)
    pub fn with_strategy(mut self, strategy: SimilarityStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Configure the shortest token kept by the vectorizer (default: 2)
    pub fn with_min_token_len(mut self, min_len: usize) -> Self {
        self.min_token_len = min_len;
        self
    }

    /// Configure the combined feature fields (default: all four)
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FeatureField>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
