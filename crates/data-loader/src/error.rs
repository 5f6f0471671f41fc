//! Error types for the data-loader crate.
//!
//! Every variant here is fatal at startup: a catalog that fails to load
//! cannot be recommended from.

use thiserror::Error;

/// Errors that can occur while loading and validating the movie table
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record in the data file couldn't be parsed
    ///
    /// `line` is the 1-based line on which the record starts
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The header row lacks a column the feature pipeline needs
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A record has more fields than the header declares
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
