// Copyright (c) 2025 Wordtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Count Trie Implementation
//!
//! A character trie that maps words to occurrence counts. Words sharing a
//! prefix share the nodes of that prefix, and a node counts as a stored word
//! only while its count is greater than zero.
//!
//! # Example
//!
//! ```
//! use wordtally_lib::data_structures::word_count_trie::WordCountTrie;
//!
//! let mut trie = WordCountTrie::new();
//! trie.increment_or_insert("the").unwrap();
//! trie.increment_or_insert("the").unwrap();
//! trie.increment_or_insert("then").unwrap();
//!
//! assert_eq!(trie.get_count("the").unwrap(), 2);
//! assert_eq!(trie.get_count("th").unwrap(), -1);
//! assert_eq!(trie.count_nodes(), 5);
//! ```

mod error;
mod node;
mod shared;

#[cfg(test)]
mod tests;

use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use error::{WordCountTrieError, WordCountTrieResult};
pub use node::TrieNode;
pub use shared::SharedWordCountTrie;

/// Value returned by [`WordCountTrie::get_count`] for a word that is not stored.
pub const NOT_FOUND: i64 = -1;

/// A word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    /// The stored word
    pub word: String,

    /// How many times the word was inserted
    pub count: u64,
}

impl WordCount {
    /// Creates a new word count pair.
    pub fn new<W: Into<String>>(word: W, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl Display for WordCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.word, self.count)
    }
}

/// Anything that accepts already-clean word tokens one at a time.
///
/// Loaders only ever talk to a counter through this trait.
#[cfg_attr(test, mockall::automock)]
pub trait WordSink {
    /// Records one occurrence of `word`.
    fn increment(&mut self, word: &str) -> WordCountTrieResult<()>;
}

/// Word frequency trie.
///
/// The root is allocated eagerly, so an empty trie has exactly one node.
/// Nodes are created lazily, are never removed, and counts only grow.
#[derive(Debug, Clone, Default)]
pub struct WordCountTrie {
    /// Sentinel root node
    root: TrieNode,
}

impl WordCountTrie {
    /// Creates a new empty `WordCountTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
        }
    }

    /// Adds one occurrence of `word`, creating any missing nodes on its path.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to count. Must not be empty.
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - The word's count after the increment.
    /// * `Err(WordCountTrieError)` - If the word is empty or its count would overflow.
    pub fn increment_or_insert<W>(&mut self, word: W) -> WordCountTrieResult<u64>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(WordCountTrieError::EmptyWord);
        }

        let mut node = &mut self.root;
        let mut created = 0usize;
        for c in word.chars() {
            let (child, is_new) = node.child_or_insert(c);
            created += usize::from(is_new);
            node = child;
        }

        node.count = node
            .count
            .checked_add(1)
            .ok_or_else(|| WordCountTrieError::CountOverflow(word.to_string()))?;

        tracing::trace!(word, count = node.count, created, "Incremented word");
        Ok(node.count)
    }

    /// Checks whether `word` is stored with a count greater than zero.
    ///
    /// A word whose path only exists as the prefix of a longer word is not
    /// contained.
    pub fn contains<W>(&self, word: W) -> WordCountTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(WordCountTrieError::EmptyWord);
        }

        Ok(self.node_for(word).is_some_and(|node| node.is_terminal()))
    }

    /// Returns the count of `word`, or [`NOT_FOUND`] (`-1`) if it is not stored.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look up. Must not be empty.
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The count, or `-1` when the path is missing or ends at a zero count.
    ///   Counts above `i64::MAX` saturate; use [`WordCountTrie::count_of`] for the exact value.
    /// * `Err(WordCountTrieError)` - If the word is empty.
    pub fn get_count<W>(&self, word: W) -> WordCountTrieResult<i64>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(WordCountTrieError::EmptyWord);
        }

        Ok(Self::count_from(&self.root, word))
    }

    /// Returns the count of `word` as an `Option`, `None` when it is not stored.
    pub fn count_of<W>(&self, word: W) -> WordCountTrieResult<Option<u64>>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(WordCountTrieError::EmptyWord);
        }

        Ok(self
            .node_for(word)
            .filter(|node| node.is_terminal())
            .map(|node| node.count))
    }

    /// Walks to the node spelling `word`, if that path exists.
    fn node_for(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    /// Consumes one character of `word` per call. `word` is never empty here.
    fn count_from(node: &TrieNode, word: &str) -> i64 {
        let mut chars = word.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return NOT_FOUND,
        };

        let child = match node.child(first) {
            Some(child) => child,
            None => return NOT_FOUND,
        };

        let rest = chars.as_str();
        if rest.is_empty() {
            if child.is_terminal() {
                i64::try_from(child.count).unwrap_or(i64::MAX)
            } else {
                NOT_FOUND
            }
        } else {
            Self::count_from(child, rest)
        }
    }

    /// Lists every stored word, sorted by descending count.
    ///
    /// Words are first collected depth-first, visiting siblings in the order
    /// they were created. The sort is stable, so equal counts keep that
    /// traversal order.
    pub fn list_by_descending_count(&self) -> Vec<WordCount> {
        let mut words = Vec::new();
        let mut prefix = String::new();
        Self::collect_words(&self.root, &mut prefix, &mut words);

        words.sort_by_key(|w| Reverse(w.count));
        words
    }

    /// Appends every terminal descendant of `node` to `out`.
    fn collect_words(node: &TrieNode, prefix: &mut String, out: &mut Vec<WordCount>) {
        for child in &node.children {
            prefix.push(child.character);
            if child.is_terminal() {
                out.push(WordCount::new(prefix.as_str(), child.count));
            }
            Self::collect_words(child, prefix, out);
            prefix.pop();
        }
    }

    /// Counts the root and every descendant node, including zero-count ones.
    pub fn count_nodes(&self) -> usize {
        Self::count_nodes_from(&self.root)
    }

    fn count_nodes_from(node: &TrieNode) -> usize {
        1 + node
            .children
            .iter()
            .map(Self::count_nodes_from)
            .sum::<usize>()
    }

    /// Returns the number of distinct stored words.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        Self::count_terminals(&self.root)
    }

    fn count_terminals(node: &TrieNode) -> usize {
        let own = usize::from(node.is_terminal());
        own + node
            .children
            .iter()
            .map(Self::count_terminals)
            .sum::<usize>()
    }

    /// Checks whether no word has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Returns the sum of all word counts, i.e. the number of accepted tokens.
    pub fn total_count(&self) -> u64 {
        Self::sum_counts(&self.root)
    }

    fn sum_counts(node: &TrieNode) -> u64 {
        node.children
            .iter()
            .fold(node.count, |acc, child| acc.saturating_add(Self::sum_counts(child)))
    }
}

impl WordSink for WordCountTrie {
    fn increment(&mut self, word: &str) -> WordCountTrieResult<()> {
        self.increment_or_insert(word).map(|_| ())
    }
}
