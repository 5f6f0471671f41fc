//! Core domain types for the movie metadata table.
//!
//! - `MovieIndex` is the row identity shared by every later stage
//! - `MovieRecord` is one immutable row after normalization
//! - `MovieCatalog` owns all records plus the case-folded title index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable row identifier for a movie.
///
/// Equal to the record's position in the catalog, so it doubles as the row
/// and column number in the count and similarity matrices.
pub type MovieIndex = usize;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Metadata columns that feed the bag-of-words representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureField {
    Keywords,
    Cast,
    Genres,
    Director,
}

impl FeatureField {
    /// All feature fields in their canonical combination order
    pub const ALL: [FeatureField; 4] = [
        FeatureField::Keywords,
        FeatureField::Cast,
        FeatureField::Genres,
        FeatureField::Director,
    ];

    /// Header name of the column holding this field
    pub fn column_name(&self) -> &'static str {
        match self {
            FeatureField::Keywords => "keywords",
            FeatureField::Cast => "cast",
            FeatureField::Genres => "genres",
            FeatureField::Director => "director",
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for FeatureField {
    type Err = String;

    /// Accepts the column name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        FeatureField::ALL
            .into_iter()
            .find(|field| field.column_name() == name)
            .ok_or_else(|| {
                format!(
                    "unknown feature field {:?} (expected keywords, cast, genres or director)",
                    s
                )
            })
    }
}

/// One movie row.
///
/// Missing feature values are normalized to empty strings at load time,
/// so every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub index: MovieIndex,
    pub title: String,
    pub keywords: String,
    pub cast: String,
    pub genres: String,
    pub director: String,
}

impl MovieRecord {
    /// Build a record, normalizing `None` feature values to empty strings
    pub fn new(
        index: MovieIndex,
        title: impl Into<String>,
        keywords: Option<&str>,
        cast: Option<&str>,
        genres: Option<&str>,
        director: Option<&str>,
    ) -> Self {
        Self {
            index,
            title: title.into(),
            keywords: keywords.unwrap_or_default().to_string(),
            cast: cast.unwrap_or_default().to_string(),
            genres: genres.unwrap_or_default().to_string(),
            director: director.unwrap_or_default().to_string(),
        }
    }

    /// Borrow the value of a feature field
    pub fn field(&self, field: FeatureField) -> &str {
        match field {
            FeatureField::Keywords => &self.keywords,
            FeatureField::Cast => &self.cast,
            FeatureField::Genres => &self.genres,
            FeatureField::Director => &self.director,
        }
    }
}

// =============================================================================
// MovieCatalog - The In-Memory Table
// =============================================================================

/// Ordered, immutable collection of movies with O(1) lookups.
///
/// Records are stored so that `movies[i].index == i`.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    pub(crate) movies: Vec<MovieRecord>,
    /// Lowercased title -> first index carrying that title
    pub(crate) title_index: HashMap<String, MovieIndex>,
}

impl MovieCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by index
    pub fn get_movie(&self, index: MovieIndex) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    /// Get the title of a movie by index
    pub fn title_of(&self, index: MovieIndex) -> Option<&str> {
        self.movies.get(index).map(|m| m.title.as_str())
    }

    /// Case-insensitive exact title lookup.
    ///
    /// The caller is responsible for trimming; whitespace is significant here.
    pub fn find_by_title(&self, title: &str) -> Option<MovieIndex> {
        self.title_index.get(&title.to_lowercase()).copied()
    }

    /// All movies in dataset order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Iterate over titles in dataset order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
