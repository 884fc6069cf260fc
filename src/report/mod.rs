//! Reporting for Wordtally.
//!
//! Everything here consumes the sorted listing produced by the counter and
//! never reorders it: truncation is a prefix take.

pub mod cloud;

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data_structures::word_count_trie::WordCount;
use crate::error::report::ReportError;

/// Output format for the plain listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `word:count` per line
    #[default]
    Plain,
    /// A JSON array of `{ "word", "count" }` objects
    Json,
}

/// Keeps the first `limit` entries, or all of them when `limit` is `None`
/// or larger than the list.
pub fn top_words(mut entries: Vec<WordCount>, limit: Option<usize>) -> Vec<WordCount> {
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

/// Renders one `word:count` line per entry.
pub fn render_plain(entries: &[WordCount]) -> String {
    let mut out = String::new();
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{entry}");
    }
    out
}

/// Renders the entries as a pretty-printed JSON array.
pub fn render_json(entries: &[WordCount]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Renders the entries in the requested format.
pub fn render(entries: &[WordCount], format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Plain => Ok(render_plain(entries)),
        ReportFormat::Json => render_json(entries),
    }
}

/// Writes a rendered report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ReportError> {
    let path = path.as_ref();
    std::fs::write(path, contents).map_err(|source| ReportError::OutputNotWritable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "Report written");
    Ok(())
}
