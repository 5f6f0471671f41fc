//! Error types for the similarity crate.

use data_loader::MovieIndex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Requested a row or column the engine was not built with
    #[error("Movie index {index} out of range (engine holds {len} movies)")]
    IndexOutOfRange { index: MovieIndex, len: usize },
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
