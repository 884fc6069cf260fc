// Copyright (c) 2025 Wordtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the word count trie.

/// Errors that can occur in word count trie operations.
///
/// A word that is simply absent is not an error: lookups report it through
/// `false` or the `-1` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordCountTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word's count cannot be incremented any further.
    #[error("Count for word '{0}' would overflow")]
    CountOverflow(String),
}

/// Result type for word count trie operations.
pub type WordCountTrieResult<T> = Result<T, WordCountTrieError>;
