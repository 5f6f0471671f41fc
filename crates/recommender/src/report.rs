//! Rendering and exporting a finished recommendation list.
//!
//! The plain-text layout is:
//!
//! ```text
//! Movies similar to 'Avatar':
//!
//! Guardians of the Galaxy (Score: 0.35)
//! Aliens (Score: 0.30)
//! ```

use crate::error::{RecommendError, Result};
use crate::ranking::Recommendation;
use data_loader::MovieIndex;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    /// Title as the user typed it (trimmed); shown in the header
    pub query: String,
    /// Catalog title of the queried movie
    pub title: String,
    pub movie_index: MovieIndex,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    pub fn new(
        title: impl Into<String>,
        movie_index: MovieIndex,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        let title = title.into();
        Self {
            query: title.clone(),
            title,
            movie_index,
            recommendations,
        }
    }

    /// Name the header after the typed text instead of the catalog title
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn header(&self) -> String {
        format!("Movies similar to '{}':", self.query)
    }

    /// One formatted line per recommendation, in ranked order
    pub fn lines(&self) -> Vec<String> {
        self.recommendations.iter().map(ToString::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Full plain-text report, newline terminated
    pub fn render(&self) -> String {
        let mut out = self.header();
        out.push_str("\n\n");
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the plain-text report to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render()).map_err(|source| RecommendError::Write {
            path: path.display().to_string(),
            source,
        })?;
        info!(
            "Saved {} recommendations for '{}' to {}",
            self.recommendations.len(),
            self.title,
            path.display()
        );
        Ok(())
    }
}

impl fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
