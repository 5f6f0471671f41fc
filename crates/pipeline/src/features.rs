//! Feature combination.
//!
//! This module joins the selected metadata fields of each movie into the
//! single text blob the vectorizer counts tokens in.

use data_loader::{FeatureField, MovieIndex, MovieRecord};
use rayon::prelude::*;
use tracing::debug;

/// Combined feature text for one movie.
///
/// Computed once per record and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedFeatures {
    pub movie_index: MovieIndex,
    pub text: String,
}

/// Lets a `&[CombinedFeatures]` feed the vectorizer directly
impl AsRef<str> for CombinedFeatures {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Joins selected feature fields with a single space.
///
/// The default selection is keywords, cast, genres, director, in that order.
/// Empty fields still contribute their separator, so they add no tokens but
/// keep the layout fixed.
#[derive(Debug, Clone)]
pub struct FeatureCombiner {
    fields: Vec<FeatureField>,
}

impl FeatureCombiner {
    /// Create a combiner over all four feature fields.
    pub fn new() -> Self {
        Self {
            fields: FeatureField::ALL.to_vec(),
        }
    }

    /// Select which fields to combine (builder pattern).
    ///
    /// Order is kept as given.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FeatureField>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn fields(&self) -> &[FeatureField] {
        &self.fields
    }

    /// Combine the selected fields of a single movie.
    pub fn combine(&self, movie: &MovieRecord) -> String {
        self.fields
            .iter()
            .map(|&field| movie.field(field))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Combine features for all movies in parallel.
    ///
    /// # Returns
    /// One CombinedFeatures per movie, in the same order
    pub fn combine_all(&self, movies: &[MovieRecord]) -> Vec<CombinedFeatures> {
        debug!(
            "Combining {:?} for {} movies",
            self.fields,
            movies.len()
        );
        movies
            .par_iter()
            .map(|movie| CombinedFeatures {
                movie_index: movie.index,
                text: self.combine(movie),
            })
            .collect()
    }
}

impl Default for FeatureCombiner {
    fn default() -> Self {
        Self::new()
    }
}
