//! HTML word cloud rendering.
//!
//! Each word becomes a `<span>` whose font size grows linearly with its
//! count, from `min_font_px` for the least frequent word in the list to
//! `max_font_px` for the most frequent one.

use std::fmt::Write as _;

use crate::config::report::CloudConfig;
use crate::data_structures::word_count_trie::WordCount;

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Font size in pixels for `count`, given the count range of the list.
pub fn font_size(count: u64, min_count: u64, max_count: u64, config: &CloudConfig) -> u32 {
    if max_count <= min_count {
        return config.max_font_px;
    }

    let span_px = u128::from(config.max_font_px.saturating_sub(config.min_font_px));
    let offset = u128::from(count.clamp(min_count, max_count) - min_count);
    let range = u128::from(max_count - min_count);
    let extra = (offset * span_px + range / 2) / range;

    // extra <= span_px, which came from a u32
    config.min_font_px + extra as u32
}

/// Renders `entries` as a standalone HTML document, in the order given.
pub fn render_html(entries: &[WordCount], config: &CloudConfig) -> String {
    let min_count = entries.iter().map(|e| e.count).min().unwrap_or(0);
    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
    let mut html = String::new();
    // Writing to a String cannot fail.
    let _ = write_html(&mut html, entries, config, (min_count, max_count));

    tracing::debug!(words = entries.len(), min_count, max_count, "Rendered word cloud");
    html
}

fn write_html(
    html: &mut String,
    entries: &[WordCount],
    config: &CloudConfig,
    (min_count, max_count): (u64, u64),
) -> std::fmt::Result {
    let title = escape_html(&config.title);
    let separator = escape_html(&config.separator);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html>")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{title}</title>")?;
    writeln!(html, "<style>")?;
    writeln!(html, "body {{ font-family: sans-serif; }}")?;
    writeln!(html, ".cloud {{ max-width: 60em; margin: 2em auto; text-align: center; line-height: 1.4; }}")?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<h1>{title}</h1>")?;
    writeln!(html, "<div class=\"cloud\">")?;

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            writeln!(html, "{separator}")?;
        }
        let size = font_size(entry.count, min_count, max_count, config);
        let word = escape_html(&entry.word);
        write!(
            html,
            "<span style=\"font-size: {size}px\" title=\"{word}: {count}\">{word}</span>",
            count = entry.count
        )?;
    }
    if !entries.is_empty() {
        writeln!(html)?;
    }

    writeln!(html, "</div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")
}
