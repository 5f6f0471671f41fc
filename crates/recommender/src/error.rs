//! Error types for the recommender crate.
//!
//! A title that matches nothing is not an error; see
//! [`Resolution`](crate::Resolution) and [`QueryOutcome`](crate::QueryOutcome).

use data_loader::DataLoadError;
use similarity::SimilarityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// The dataset could not be loaded; fatal at startup
    #[error(transparent)]
    Load(#[from] DataLoadError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),

    /// Save was requested before any recommendations were produced
    #[error("No recommendations to save")]
    NothingToSave,

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
