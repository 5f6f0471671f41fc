//! Word tokenizer used by default.

use crate::traits::Tokenizer;

/// Default minimum token length, in characters
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Splits on every run of characters that are neither alphanumeric nor `_`.
///
/// Case is preserved, so `Action` and `action` are different tokens.
/// Tokens shorter than `min_len` characters are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTokenizer {
    min_len: usize,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            min_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }

    /// Configure the minimum token length (default: 2)
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Tokenizer for WordTokenizer {
    fn name(&self) -> &str {
        "WordTokenizer"
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|c: char| !is_word_char(c))
            .filter(|token| !token.is_empty() && token.chars().count() >= self.min_len)
            .collect()
    }
}
