//! Data structures for Wordtally.
//!
//! The word count trie is the only structure with non-trivial design in the
//! crate; every other component talks to it through its public operations.

pub mod word_count_trie;

// Re-export common data structures
pub use word_count_trie::{
    SharedWordCountTrie, WordCount, WordCountTrie, WordCountTrieError, WordCountTrieResult,
    WordSink,
};
