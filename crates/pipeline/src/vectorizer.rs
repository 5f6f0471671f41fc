//! Bag-of-words count vectorization.
//!
//! ## Algorithm
//! 1. Tokenize every document in order and assign each new token the next
//!    free column (discovery order, so the layout is reproducible)
//! 2. Count token occurrences per document against that vocabulary
//!
//! Step 1 is sequential because column numbers depend on document order.
//! Step 2 is independent per document and runs on the Rayon pool.

use crate::tokenizer::WordTokenizer;
use crate::traits::Tokenizer;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{info, instrument};

/// Column position of a token in the count matrix
pub type ColumnIndex = usize;

/// Token -> column mapping, fixed once fitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: HashMap<String, ColumnIndex>,
}

impl Vocabulary {
    /// Return the column for `token`, assigning the next one if unseen
    fn insert(&mut self, token: &str) -> ColumnIndex {
        if let Some(&column) = self.positions.get(token) {
            return column;
        }
        let column = self.terms.len();
        self.terms.push(token.to_string());
        self.positions.insert(token.to_string(), column);
        column
    }

    /// Column of a token, if it was seen while fitting
    pub fn get(&self, token: &str) -> Option<ColumnIndex> {
        self.positions.get(token).copied()
    }

    /// Token stored at a column
    pub fn term(&self, column: ColumnIndex) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// Tokens in column order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Sparse token counts for one document.
///
/// Entries are sorted by column and never hold a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountVector {
    entries: Vec<(ColumnIndex, u32)>,
}

impl CountVector {
    fn from_counts(counts: HashMap<ColumnIndex, u32>) -> Self {
        let mut entries: Vec<_> = counts.into_iter().filter(|&(_, n)| n > 0).collect();
        entries.sort_unstable_by_key(|&(column, _)| column);
        Self { entries }
    }

    /// Non-zero `(column, count)` pairs in column order
    pub fn entries(&self) -> &[(ColumnIndex, u32)] {
        &self.entries
    }

    /// Count stored at `column` (0 when absent)
    pub fn get(&self, column: ColumnIndex) -> u32 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, n)| n).sum()
    }

    pub fn squared_norm(&self) -> f64 {
        self.entries.iter().map(|&(_, n)| f64::from(n) * f64::from(n)).sum()
    }

    pub fn norm(&self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Dot product via a merge over the two sorted entry lists
    pub fn dot(&self, other: &CountVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, na) = self.entries[i];
            let (cb, nb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += f64::from(na) * f64::from(nb);
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// One CountVector per movie plus the vocabulary that defines the columns.
///
/// Row `i` belongs to the movie with index `i`.
#[derive(Debug, Clone, Default)]
pub struct CountMatrix {
    vocabulary: Vocabulary,
    rows: Vec<CountVector>,
}

impl CountMatrix {
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[CountVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&CountVector> {
        self.rows.get(index)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Builds a vocabulary and count vectors from a corpus.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer<T: Tokenizer = WordTokenizer> {
    tokenizer: T,
}

impl CountVectorizer<WordTokenizer> {
    /// Create a vectorizer using the default word tokenizer
    pub fn new() -> Self {
        Self::with_tokenizer(WordTokenizer::new())
    }
}

impl<T: Tokenizer> CountVectorizer<T> {
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Fit the vocabulary on `documents` and count tokens in each of them.
    #[instrument(skip_all, fields(tokenizer = self.tokenizer.name(), documents = documents.len()))]
    pub fn fit_transform<D>(&self, documents: &[D]) -> CountMatrix
    where
        D: AsRef<str> + Sync,
    {
        let mut vocabulary = Vocabulary::default();
        for document in documents {
            for token in self.tokenizer.tokenize(document.as_ref()) {
                vocabulary.insert(token);
            }
        }

        let rows: Vec<CountVector> = documents
            .par_iter()
            .map(|document| self.transform(&vocabulary, document.as_ref()))
            .collect();

        info!(
            "Vectorized {} documents into {} vocabulary columns",
            rows.len(),
            vocabulary.len()
        );

        CountMatrix { vocabulary, rows }
    }

    /// Count tokens of `text` against an already fitted vocabulary.
    ///
    /// Tokens the vocabulary has never seen are ignored.
    pub fn transform(&self, vocabulary: &Vocabulary, text: &str) -> CountVector {
        let mut counts: HashMap<ColumnIndex, u32> = HashMap::new();
        for token in self.tokenizer.tokenize(text) {
            if let Some(column) = vocabulary.get(token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }
        CountVector::from_counts(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_discovery_order() {
        let vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&["beta alpha", "gamma alpha beta"]);

        assert_eq!(matrix.vocabulary().terms(), &["beta", "alpha", "gamma"]);
        assert_eq!(matrix.n_rows(), 2);
        assert_eq!(matrix.n_cols(), 3);
    }

    #[test]
    fn test_counts_repeated_tokens() {
        let vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&["war war peace", "peace"]);
        let war = matrix.vocabulary().get("war").unwrap();
        let peace = matrix.vocabulary().get("peace").unwrap();

        let first = matrix.row(0).unwrap();
        assert_eq!(first.get(war), 2);
        assert_eq!(first.get(peace), 1);
        assert_eq!(first.total(), 3);
        assert_eq!(matrix.row(1).unwrap().get(war), 0);
    }

    #[test]
    fn test_empty_document_has_empty_vector() {
        let vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&["space", "   "]);
        assert!(matrix.row(1).unwrap().is_empty());
        assert_eq!(matrix.row(1).unwrap().norm(), 0.0);
    }

    #[test]
    fn test_transform_ignores_unknown_tokens() {
        let vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&["space opera"]);

        let vector = vectorizer.transform(matrix.vocabulary(), "space western space");
        assert_eq!(vector.nnz(), 1);
        assert_eq!(vector.get(0), 2);
    }

    #[test]
    fn test_dot_and_norm() {
        let vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&["k1 c1 g1 d1", "k1 c2 g1 d2"]);
        let a = matrix.row(0).unwrap();
        let b = matrix.row(1).unwrap();

        assert_eq!(a.dot(b), 2.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.squared_norm(), 4.0);
        assert_eq!(a.norm(), 2.0);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let docs = ["one two three", "three four", "five one"];
        let first = CountVectorizer::new().fit_transform(&docs);
        let second = CountVectorizer::new().fit_transform(&docs);

        assert_eq!(first.vocabulary(), second.vocabulary());
        assert_eq!(first.rows(), second.rows());
    }
}
