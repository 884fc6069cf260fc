//! Wordtally Library
//!
//! Counts word occurrences in a character trie and reports them by frequency.
//! The library is used by the `wordtally` binary, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::word_count_trie`] holds the counts and answers lookups
//! - [`text`] turns raw text into clean tokens and feeds a [`data_structures::WordSink`]
//! - [`report`] truncates and renders the sorted listing as text, JSON or HTML
//! - [`config`] and [`error`] carry the ambient settings and error types

pub mod config;
pub mod data_structures;
pub mod error;
pub mod report;
pub mod text;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;
