// Copyright (c) 2025 Wordtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for loading text and exporting reports through the
//! public library API.

use std::fs;

use wordtally_lib::config::report::CloudConfig;
use wordtally_lib::config::tokenizer::TokenizerConfig;
use wordtally_lib::data_structures::{WordCount, WordCountTrie};
use wordtally_lib::error::loader::LoaderError;
use wordtally_lib::report::{self, cloud, ReportFormat};
use wordtally_lib::text::{StopWords, WordLoader};

const TEXT: &str = "\
The sea, the sea! The open sea.
A ship sails the sea; a ship sinks.
\"Ship\" ahoy.";

fn load(text: &str) -> WordCountTrie {
    let mut trie = WordCountTrie::new();
    let mut loader = WordLoader::with_stop_words(
        TokenizerConfig::default(),
        StopWords::from_words(["a", "the"]),
    );
    loader.load_str(text, &mut trie).unwrap();
    trie
}

// Ties keep depth-first order, so words under the 's' branch come first.
#[test]
fn test_sorted_listing() {
    let trie = load(TEXT);

    assert_eq!(
        trie.list_by_descending_count(),
        vec![
            WordCount::new("sea", 4),
            WordCount::new("ship", 3),
            WordCount::new("sails", 1),
            WordCount::new("sinks", 1),
            WordCount::new("open", 1),
            WordCount::new("ahoy", 1),
        ]
    );
    assert!(!trie.contains("the").unwrap());
    assert_eq!(trie.get_count("a").unwrap(), -1);
}

#[test]
fn test_plain_and_json_reports() {
    let trie = load(TEXT);
    let entries = report::top_words(trie.list_by_descending_count(), Some(2));

    let plain = report::render(&entries, ReportFormat::Plain).unwrap();
    assert_eq!(plain, "sea:4\nship:3\n");

    let json = report::render(&entries, ReportFormat::Json).unwrap();
    let parsed: Vec<WordCount> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entries);
}

#[test]
fn test_word_cloud_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cloud.html");
    let trie = load(TEXT);

    // A limit beyond the vocabulary keeps every word.
    let entries = report::top_words(trie.list_by_descending_count(), Some(100));
    assert_eq!(entries.len(), 6);

    let config = CloudConfig {
        title: "Sea & Ships".to_string(),
        ..CloudConfig::default()
    };
    report::write_report(&output, &cloud::render_html(&entries, &config)).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Sea &amp; Ships</title>"));
    assert!(html.contains("<span style=\"font-size: 72px\" title=\"sea: 4\">sea</span>"));
    assert!(html.contains("<span style=\"font-size: 12px\" title=\"ahoy: 1\">ahoy</span>"));
}

#[test]
fn test_missing_source_leaves_trie_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut trie = load("sea sea");
    let mut loader = WordLoader::new(TokenizerConfig::default());

    let result = loader.load_file(dir.path().join("missing.txt"), &mut trie);

    assert!(matches!(result, Err(LoaderError::SourceNotFound(_))));
    assert_eq!(trie.get_count("sea").unwrap(), 2);
}
