//! MovieCatalog building and validation.
//!
//! - Parse the table
//! - Check that row indices are dense and in order
//! - Build the case-folded title index for O(1) exact lookups

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info, warn};

impl MovieCatalog {
    /// Load the movie table from a CSV file.
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {}", path.display());

        let movies = parser::parse_movies(path)?;
        let catalog = Self::from_records(movies)?;

        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from already-parsed records
    pub fn from_records(movies: Vec<MovieRecord>) -> Result<Self> {
        let mut catalog = Self {
            movies,
            ..Self::default()
        };
        catalog.validate()?;
        catalog.build_title_index();
        Ok(catalog)
    }

    /// Index titles by their lowercase form.
    ///
    /// When two rows share a title, the earlier row wins.
    fn build_title_index(&mut self) {
        self.title_index.clear();
        for movie in &self.movies {
            self.title_index
                .entry(movie.title.to_lowercase())
                .or_insert(movie.index);
        }

        let duplicates = self.movies.len() - self.title_index.len();
        if duplicates > 0 {
            debug!("{} titles shadowed by an earlier row with the same name", duplicates);
        }
    }

    /// Validate data integrity
    ///
    /// Every record's index must equal its row position so that catalog rows,
    /// count-matrix rows and similarity-matrix rows line up one to one.
    pub fn validate(&self) -> Result<()> {
        for (position, movie) in self.movies.iter().enumerate() {
            if movie.index != position {
                return Err(DataLoadError::ValidationError(format!(
                    "row {} has index {}; indices must be dense and in row order",
                    position, movie.index
                )));
            }
            if movie.title.trim().is_empty() {
                warn!("Movie {} has an empty title and can only be reached by index", position);
            }
        }
        Ok(())
    }
}
