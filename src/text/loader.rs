//! Feeds text into a [`WordSink`].

use std::borrow::Cow;
use std::path::Path;

use crate::config::tokenizer::TokenizerConfig;
use crate::data_structures::word_count_trie::WordSink;
use crate::error::loader::LoaderError;

use super::{normalize_token, StopWords};

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Whitespace separated tokens read
    pub tokens_seen: usize,

    /// Tokens handed to the sink
    pub words_counted: usize,

    /// Tokens dropped because they are stop words
    pub stop_words_skipped: usize,

    /// Tokens dropped because nothing was left after cleaning
    pub empty_tokens_skipped: usize,
}

impl LoadStats {
    fn merge(&mut self, other: LoadStats) {
        self.tokens_seen += other.tokens_seen;
        self.words_counted += other.words_counted;
        self.stop_words_skipped += other.stop_words_skipped;
        self.empty_tokens_skipped += other.empty_tokens_skipped;
    }
}

/// Splits, cleans and filters text, then counts every surviving word.
#[derive(Debug, Clone, Default)]
pub struct WordLoader {
    config: TokenizerConfig,
    stop_words: StopWords,
    stats: LoadStats,
}

impl WordLoader {
    /// Creates a loader with no stop words.
    pub fn new(config: TokenizerConfig) -> Self {
        Self::with_stop_words(config, StopWords::new())
    }

    /// Creates a loader that skips the given stop words.
    pub fn with_stop_words(config: TokenizerConfig, stop_words: StopWords) -> Self {
        Self {
            config,
            stop_words,
            stats: LoadStats::default(),
        }
    }

    /// Creates a loader, reading the stop-word list named in `config` if any.
    pub fn from_config(config: TokenizerConfig) -> Result<Self, LoaderError> {
        let stop_words = match &config.stop_words {
            Some(path) => StopWords::load(path)?,
            None => StopWords::new(),
        };
        Ok(Self::with_stop_words(config, stop_words))
    }

    /// Counts the words of `text` into `sink`.
    ///
    /// Words counted before an error stay counted.
    pub fn load_str<S>(&mut self, text: &str, sink: &mut S) -> Result<LoadStats, LoaderError>
    where
        S: WordSink + ?Sized,
    {
        let mut stats = LoadStats::default();

        for token in text.split_whitespace() {
            stats.tokens_seen += 1;

            let word = match normalize_token(token, &self.config) {
                Some(word) => word,
                None => {
                    stats.empty_tokens_skipped += 1;
                    continue;
                }
            };

            let key = if self.config.lowercase {
                Cow::Borrowed(word.as_str())
            } else {
                Cow::Owned(word.to_lowercase())
            };
            if self.stop_words.contains(&key) {
                stats.stop_words_skipped += 1;
                continue;
            }

            if let Err(e) = sink.increment(&word) {
                self.stats.merge(stats);
                return Err(e.into());
            }
            stats.words_counted += 1;
        }

        self.stats.merge(stats);
        Ok(stats)
    }

    /// Reads `path` and counts its words into `sink`.
    pub fn load_file<P, S>(&mut self, path: P, sink: &mut S) -> Result<LoadStats, LoaderError>
    where
        P: AsRef<Path>,
        S: WordSink + ?Sized,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            LoaderError::from_io(path.to_path_buf(), source, LoaderError::SourceNotFound)
        })?;

        let stats = self.load_str(&text, sink)?;
        tracing::debug!(
            path = %path.display(),
            tokens = stats.tokens_seen,
            counted = stats.words_counted,
            stop_words = stats.stop_words_skipped,
            empty = stats.empty_tokens_skipped,
            "Loaded source file"
        );
        Ok(stats)
    }

    /// Totals over every load performed by this loader.
    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// The stop words this loader skips.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::word_count_trie::{
        MockWordSink, WordCountTrie, WordCountTrieError,
    };
    use mockall::Sequence;

    #[test]
    fn test_load_str_feeds_clean_tokens_in_order() {
        let mut sink = MockWordSink::new();
        let mut seq = Sequence::new();
        for expected in ["hello", "world", "hello"] {
            sink.expect_increment()
                .withf(move |word| word == expected)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let mut loader = WordLoader::with_stop_words(
            TokenizerConfig::default(),
            StopWords::from_words(["the"]),
        );
        let stats = loader
            .load_str("Hello, the WORLD! ... \"hello\"", &mut sink)
            .unwrap();

        assert_eq!(
            stats,
            LoadStats {
                tokens_seen: 5,
                words_counted: 3,
                stop_words_skipped: 1,
                empty_tokens_skipped: 1,
            }
        );
    }

    #[test]
    fn test_sink_error_keeps_earlier_words() {
        let mut sink = MockWordSink::new();
        sink.expect_increment()
            .withf(|word| word == "first")
            .times(1)
            .returning(|_| Ok(()));
        sink.expect_increment()
            .withf(|word| word == "second")
            .times(1)
            .returning(|_| Err(WordCountTrieError::CountOverflow("second".to_string())));

        let mut loader = WordLoader::new(TokenizerConfig::default());
        let result = loader.load_str("first second third", &mut sink);

        assert!(matches!(result, Err(LoaderError::Sink(_))));
        assert_eq!(loader.stats().words_counted, 1);
    }

    #[test]
    fn test_stop_words_match_regardless_of_case_setting() {
        let config = TokenizerConfig {
            lowercase: false,
            ..TokenizerConfig::default()
        };
        let mut loader = WordLoader::with_stop_words(config, StopWords::from_words(["the"]));
        let mut trie = WordCountTrie::new();

        loader.load_str("The Cat the cat", &mut trie).unwrap();

        assert_eq!(trie.get_count("Cat").unwrap(), 1);
        assert_eq!(trie.get_count("cat").unwrap(), 1);
        assert!(!trie.contains("The").unwrap());
        assert!(!trie.contains("the").unwrap());
    }

    #[test]
    fn test_load_missing_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let mut loader = WordLoader::new(TokenizerConfig::default());
        let mut trie = WordCountTrie::new();

        match loader.load_file(&path, &mut trie) {
            Err(LoaderError::SourceNotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
        assert!(trie.is_empty());
    }
}
