//! Test modules for Wordtally.
//!
//! This module contains the crate-level test suite:
//! - Configuration loading and validation tests
//! - Error type and reporter tests
//! - Pipeline tests running loader, trie and reports together
//! - Shared fixtures and proptest strategies

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{sentence_strategy, TestFixture};
