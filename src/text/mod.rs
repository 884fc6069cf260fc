//! Text handling for Wordtally.
//!
//! Turns raw text into the clean word tokens the counter expects: tokens are
//! split on whitespace, optionally lowercased, stripped of surrounding
//! punctuation, and filtered against a stop-word list.

mod loader;
mod stop_words;

pub use loader::{LoadStats, WordLoader};
pub use stop_words::StopWords;

use crate::config::tokenizer::TokenizerConfig;

/// Strips characters in `punctuation` from both ends of `token`.
///
/// Characters inside the token are kept, so `"don't!"` becomes `"don't"`.
pub fn strip_punctuation<'a>(token: &'a str, punctuation: &str) -> &'a str {
    token.trim_matches(|c: char| punctuation.contains(c))
}

/// Cleans one raw token according to `config`.
///
/// Returns `None` when nothing is left, so empty words never reach a counter.
pub fn normalize_token(token: &str, config: &TokenizerConfig) -> Option<String> {
    let stripped = strip_punctuation(token, &config.punctuation).trim();
    if stripped.is_empty() {
        return None;
    }

    if config.lowercase {
        Some(stripped.to_lowercase())
    } else {
        Some(stripped.to_string())
    }
}
