//! Report error module.
//!
//! Errors raised while rendering and writing word count reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error when the output file cannot be written.
    #[error("Cannot write report to {path}: {source}")]
    OutputNotWritable {
        /// The output path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when serializing a report fails.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}
