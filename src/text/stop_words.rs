//! Stop-word list.

use std::collections::HashSet;
use std::path::Path;

use crate::error::loader::LoaderError;

/// A set of lowercased words that are never counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty list that filters nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from the given words, lowercasing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Reads a whitespace separated stop-word list from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            LoaderError::from_io(path.to_path_buf(), source, LoaderError::StopWordsNotFound)
        })?;

        let stop_words = Self::from_words(contents.split_whitespace());
        tracing::debug!(path = %path.display(), count = stop_words.len(), "Loaded stop words");
        Ok(stop_words)
    }

    /// Whether `word` is a stop word. `word` is expected to be lowercased already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list filters nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
