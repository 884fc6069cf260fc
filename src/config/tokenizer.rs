//! Tokenizer configuration module.
//!
//! This module defines how raw text is split, cleaned and filtered before
//! words reach the counter.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Characters stripped from both ends of every token by default.
pub const DEFAULT_PUNCTUATION: &str = ",.?!;'\"";

/// Tokenizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Whether tokens are lowercased before counting
    pub lowercase: bool,

    /// Characters stripped from the start and end of each token
    pub punctuation: String,

    /// Optional path to a whitespace separated stop-word list
    pub stop_words: Option<PathBuf>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            stop_words: None,
        }
    }
}

impl Validate for TokenizerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.punctuation.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(
                "punctuation must not contain whitespace".to_string(),
            ));
        }

        if let Some(path) = &self.stop_words {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "stop_words path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
