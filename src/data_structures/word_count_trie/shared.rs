// Copyright (c) 2025 Wordtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-shareable handle around a [`WordCountTrie`].
//!
//! Node creation and the count increment are separate steps, so every call,
//! reads included, takes the same exclusive lock over the whole trie.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{WordCount, WordCountTrie, WordCountTrieResult, WordSink};

/// A cloneable handle to one trie guarded by a single mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedWordCountTrie {
    inner: Arc<Mutex<WordCountTrie>>,
}

impl SharedWordCountTrie {
    /// Creates a handle to a new empty trie.
    pub fn new() -> Self {
        Self::from_trie(WordCountTrie::new())
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: WordCountTrie) -> Self {
        Self {
            inner: Arc::new(Mutex::new(trie)),
        }
    }

    /// See [`WordCountTrie::increment_or_insert`].
    pub fn increment_or_insert<W: AsRef<str>>(&self, word: W) -> WordCountTrieResult<u64> {
        self.inner.lock().increment_or_insert(word)
    }

    /// See [`WordCountTrie::contains`].
    pub fn contains<W: AsRef<str>>(&self, word: W) -> WordCountTrieResult<bool> {
        self.inner.lock().contains(word)
    }

    /// See [`WordCountTrie::get_count`].
    pub fn get_count<W: AsRef<str>>(&self, word: W) -> WordCountTrieResult<i64> {
        self.inner.lock().get_count(word)
    }

    /// See [`WordCountTrie::list_by_descending_count`].
    pub fn list_by_descending_count(&self) -> Vec<WordCount> {
        self.inner.lock().list_by_descending_count()
    }

    /// See [`WordCountTrie::count_nodes`].
    pub fn count_nodes(&self) -> usize {
        self.inner.lock().count_nodes()
    }

    /// Returns a copy of the trie as it is right now.
    pub fn snapshot(&self) -> WordCountTrie {
        self.inner.lock().clone()
    }
}

impl WordSink for SharedWordCountTrie {
    fn increment(&mut self, word: &str) -> WordCountTrieResult<()> {
        self.increment_or_insert(word).map(|_| ())
    }
}
