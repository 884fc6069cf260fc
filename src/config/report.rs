//! Report configuration module.
//!
//! This module defines how many words are reported and how the HTML word
//! cloud is laid out.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Report configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// Maximum number of words to report (None for all of them)
    pub limit: Option<usize>,

    /// Word cloud settings
    pub cloud: CloudConfig,
}

impl Validate for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.limit == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "report.limit".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        self.cloud.validate()
    }
}

/// HTML word cloud configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudConfig {
    /// Title of the generated page
    pub title: String,

    /// Text placed between two words
    pub separator: String,

    /// Font size in pixels for the least frequent word
    pub min_font_px: u32,

    /// Font size in pixels for the most frequent word
    pub max_font_px: u32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            title: "Word Cloud".to_string(),
            separator: " ".to_string(),
            min_font_px: 12,
            max_font_px: 72,
        }
    }
}

impl Validate for CloudConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_font_px == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "report.cloud.min_font_px".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.min_font_px > self.max_font_px {
            return Err(ConfigError::ValidationError(format!(
                "min_font_px ({}) must not exceed max_font_px ({})",
                self.min_font_px, self.max_font_px
            )));
        }

        Ok(())
    }
}
