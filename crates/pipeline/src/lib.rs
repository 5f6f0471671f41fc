//! Feature engineering for content-based similarity.
//!
//! This crate provides:
//! - FeatureCombiner for joining metadata fields into one text blob
//! - Tokenizer trait and the default WordTokenizer
//! - CountVectorizer for building the vocabulary and count vectors
//!
//! ## Architecture
//! The pipeline runs once at startup:
//! 1. FeatureCombiner produces one text blob per movie
//! 2. CountVectorizer fits a vocabulary over all blobs
//! 3. Each blob becomes a sparse CountVector over that vocabulary
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CountVectorizer, FeatureCombiner};
//!
//! let combined = FeatureCombiner::new().combine_all(catalog.movies());
//! let matrix = CountVectorizer::new().fit_transform(&combined);
//! ```

pub mod traits;
pub mod tokenizer;
pub mod features;
pub mod vectorizer;

// Re-export main types
pub use traits::Tokenizer;
pub use tokenizer::{WordTokenizer, DEFAULT_MIN_TOKEN_LEN};
pub use features::{CombinedFeatures, FeatureCombiner};
pub use vectorizer::{ColumnIndex, CountMatrix, CountVector, CountVectorizer, Vocabulary};
