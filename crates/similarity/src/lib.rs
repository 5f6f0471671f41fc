//! # Similarity Crate
//!
//! This crate turns count vectors into ranked similarity rows.
//!
//! ## Components
//!
//! ### Cosine scoring
//! - `cosine_similarity` over sparse CountVectors, 0.0 for empty vectors
//!
//! ### Scorers
//! - `SimilarityMatrix`: full n x n matrix precomputed at startup (eager)
//! - `LazyScorer`: one row at a time from the count vectors (lazy)
//!
//! ### Engine
//! - `SimilarityEngine` puts a single-slot `QueryCache` in front of a scorer
//!   so a repeated query for the same movie reuses its row
//!
//! ## Example Usage
//!
//! ```ignore
//! use similarity::{SimilarityEngine, SimilarityStrategy};
//!
//! let mut engine = SimilarityEngine::with_strategy(SimilarityStrategy::Eager, counts);
//! let row = engine.similarity_row(0)?;
//! assert_eq!(row.score_of(0), Some(1.0));
//! ```

// Public modules
pub mod cache;
pub mod cosine;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod scorer;
pub mod types;

// Re-export commonly used types
pub use cache::QueryCache;
pub use cosine::cosine_similarity;
pub use engine::SimilarityEngine;
pub use error::{Result, SimilarityError};
pub use matrix::SimilarityMatrix;
pub use scorer::{LazyScorer, RowScorer, SimilarityStrategy};
pub use types::{ScoredMovie, SimilarityRow};
