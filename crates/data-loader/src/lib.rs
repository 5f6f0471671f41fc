//! # Data Loader Crate
//!
//! This crate loads the movie metadata table and indexes it for lookups.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, MovieCatalog, FeatureField)
//! - **parser**: Parse the comma-separated table into Rust structs
//! - **index**: Validate rows and build the title index
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieCatalog;
//! use std::path::Path;
//!
//! let catalog = MovieCatalog::load_from_file(Path::new("movie_dataset.csv"))?;
//!
//! let index = catalog.find_by_title("avatar").unwrap();
//! println!("{} is row {}", catalog.title_of(index).unwrap(), index);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{FeatureField, MovieCatalog, MovieIndex, MovieRecord};
