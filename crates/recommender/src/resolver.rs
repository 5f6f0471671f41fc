//! Title resolution and suggestions.
//!
//! Maps free text typed by a user onto a catalog row. Exact matches are
//! case-insensitive; anything else is reported as `NotFound` and the caller
//! decides whether to fall back to suggestions.

use data_loader::{MovieCatalog, MovieIndex};
use std::sync::Arc;

/// Outcome of an exact title lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(MovieIndex),
    NotFound,
}

impl Resolution {
    pub fn index(&self) -> Option<MovieIndex> {
        match self {
            Resolution::Found(index) => Some(*index),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// How partial text is matched against titles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestMode {
    /// Title contains the text anywhere ("did you mean")
    Contains,
    /// Title starts with the text (live completion)
    Prefix,
}

#[derive(Debug, Clone)]
pub struct QueryResolver {
    catalog: Arc<MovieCatalog>,
}

impl QueryResolver {
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve typed text to a movie index.
    ///
    /// Surrounding whitespace is ignored. Blank input never matches.
    pub fn resolve_index(&self, title_text: &str) -> Resolution {
        let query = title_text.trim();
        if query.is_empty() {
            return Resolution::NotFound;
        }
        match self.catalog.find_by_title(query) {
            Some(index) => Resolution::Found(index),
            None => Resolution::NotFound,
        }
    }

    /// Titles containing `partial`, case-insensitively, in dataset order
    pub fn suggest_titles(&self, partial: &str, limit: usize) -> Vec<&str> {
        self.suggest(partial, limit, SuggestMode::Contains)
    }

    /// Titles starting with `prefix`, case-insensitively, in dataset order
    pub fn complete_title(&self, prefix: &str, limit: usize) -> Vec<&str> {
        self.suggest(prefix, limit, SuggestMode::Prefix)
    }

    pub fn suggest(&self, partial: &str, limit: usize, mode: SuggestMode) -> Vec<&str> {
        let needle = partial.to_lowercase();
        self.catalog
            .titles()
            .filter(|title| {
                let title = title.to_lowercase();
                match mode {
                    SuggestMode::Contains => title.contains(&needle),
                    SuggestMode::Prefix => title.starts_with(&needle),
                }
            })
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieRecord;

    fn resolver() -> QueryResolver {
        let titles = ["Alpha", "Beta", "Gamma", "Alphaville", "The Italian Job"];
        let records = titles
            .iter()
            .enumerate()
            .map(|(i, t)| MovieRecord::new(i, *t, None, None, None, None))
            .collect();
        QueryResolver::new(Arc::new(MovieCatalog::from_records(records).unwrap()))
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_index("alpha"), Resolution::Found(0));
        assert_eq!(resolver.resolve_index("  BETA \n"), Resolution::Found(1));
        assert_eq!(resolver.resolve_index("alpha").index(), Some(0));
    }

    #[test]
    fn test_resolve_requires_full_title() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_index("Alph"), Resolution::NotFound);
        assert_eq!(resolver.resolve_index("Zzz"), Resolution::NotFound);
        assert_eq!(resolver.resolve_index("   "), Resolution::NotFound);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_index("gamma"), resolver.resolve_index("gamma"));
    }

    #[test]
    fn test_suggest_contains() {
        let resolver = resolver();
        assert_eq!(
            resolver.suggest_titles("al", 10),
            vec!["Alpha", "Alphaville", "The Italian Job"]
        );
        assert_eq!(resolver.suggest_titles("al", 1), vec!["Alpha"]);
        assert!(resolver.suggest_titles("zzz", 10).is_empty());
    }

    #[test]
    fn test_complete_prefix() {
        let resolver = resolver();
        assert_eq!(resolver.complete_title("AL", 10), vec!["Alpha", "Alphaville"]);
        assert!(resolver.complete_title("ital", 10).is_empty());
    }
}
