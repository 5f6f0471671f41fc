//! Core traits for the feature pipeline.
//!
//! This module defines the Tokenizer trait that lets the vectorizer swap
//! token extraction rules without touching vocabulary or counting code.

/// Splits a text blob into the tokens counted by the vectorizer.
///
/// ## Design Note
/// - `Send + Sync` lets a tokenizer be shared by the parallel counting pass
/// - Tokens borrow from the input, so tokenizing allocates only the Vec
pub trait Tokenizer: Send + Sync {
    /// Returns the name of this tokenizer (for logging/debugging)
    fn name(&self) -> &str;

    /// Extract tokens from `text` in order of appearance.
    ///
    /// Must be deterministic: the same input always yields the same tokens
    /// in the same order.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}
