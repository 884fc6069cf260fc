//! Loader error module.
//!
//! Errors raised while reading source text and stop-word lists.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::word_count_trie::WordCountTrieError;

/// Errors that can occur while loading words into a counter.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when the source text file does not exist.
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// Error when the stop-word list does not exist.
    #[error("Stop-word list not found: {0}")]
    StopWordsNotFound(PathBuf),

    /// Error when a file exists but cannot be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when the counter rejects a token.
    #[error("Failed to count token: {0}")]
    Sink(#[from] WordCountTrieError),
}

impl LoaderError {
    /// Maps an IO error on `path` to the matching loader error.
    ///
    /// `not_found` builds the variant used when the file is missing.
    pub(crate) fn from_io(
        path: PathBuf,
        source: std::io::Error,
        not_found: fn(PathBuf) -> LoaderError,
    ) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            not_found(path)
        } else {
            LoaderError::Read { path, source }
        }
    }
}
