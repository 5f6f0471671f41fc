//! Recommender crate: content-based "more like this" for movies.
//!
//! This crate contains the query side of the system and the orchestrator
//! that builds everything from a loaded catalog:
//! - **resolver**: typed title -> movie index, plus suggestions on a miss
//! - **ranking**: similarity row -> top-K recommendations
//! - **report**: plain-text and JSON rendering, save to file
//! - **orchestrator**: startup pipeline and per-query flow
//! - **config**: tunables with builder-style setters

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod ranking;
pub mod report;
pub mod resolver;

pub use config::{
    RecommenderConfig, DEFAULT_LIVE_SUGGESTION_LIMIT, DEFAULT_SUGGESTION_LIMIT, DEFAULT_TOP_K,
};
pub use error::{RecommendError, Result};
pub use orchestrator::{QueryOutcome, RecommendationOrchestrator};
pub use ranking::{rank, Recommendation};
pub use report::RecommendationReport;
pub use resolver::{QueryResolver, Resolution, SuggestMode};

// Callers configure the pipeline without depending on its crates directly
pub use data_loader::FeatureField;
pub use pipeline::DEFAULT_MIN_TOKEN_LEN;
pub use similarity::SimilarityStrategy;
