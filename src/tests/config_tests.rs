//! Tests for the configuration module.

use crate::config::report::{CloudConfig, ReportConfig};
use crate::config::tokenizer::{TokenizerConfig, DEFAULT_PUNCTUATION};
use crate::config::{ConfigLoader, LogConfig, Validate, WordTallyConfig};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::{Path, PathBuf};

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = WordTallyConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.tokenizer.lowercase);
    assert_eq!(config.tokenizer.punctuation, DEFAULT_PUNCTUATION);
    assert_eq!(config.report.limit, None);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = WordTallyConfig::default();

    config.report.limit = Some(0);
    assert!(config.validate().is_err());

    config.report.limit = Some(25);
    config.report.cloud.min_font_px = 80;
    assert!(config.validate().is_err());

    config.report.cloud.min_font_px = 10;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test that validation fails for each section's rules.
#[test]
fn test_specific_validation_rules() {
    let tokenizer = TokenizerConfig {
        punctuation: ", .".to_string(),
        ..TokenizerConfig::default()
    };
    assert!(tokenizer.validate().is_err());

    let tokenizer = TokenizerConfig {
        stop_words: Some(PathBuf::new()),
        ..TokenizerConfig::default()
    };
    assert!(tokenizer.validate().is_err());

    let cloud = CloudConfig {
        min_font_px: 0,
        ..CloudConfig::default()
    };
    assert!(matches!(
        cloud.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    let report = ReportConfig {
        limit: Some(0),
        ..ReportConfig::default()
    };
    assert!(report.validate().is_err());

    let log = LogConfig {
        level: "verbose".to_string(),
        ..LogConfig::default()
    };
    assert!(log.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "wordtally.toml",
            r#"
            [tokenizer]
            lowercase = false
            stop_words = "stop.txt"

            [report]
            limit = 20

            [report.cloud]
            title = "Moby Dick"
            max_font_px = 96
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert!(!config.tokenizer.lowercase);
    assert_eq!(config.tokenizer.stop_words, Some(PathBuf::from("stop.txt")));
    assert_eq!(config.report.limit, Some(20));
    assert_eq!(config.report.cloud.title, "Moby Dick");
    assert_eq!(config.report.cloud.max_font_px, 96);

    // Other values should be defaults
    assert_eq!(config.report.cloud.min_font_px, 12);
    assert_eq!(config.tokenizer.punctuation, DEFAULT_PUNCTUATION);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "wordtally.toml",
            r#"
            [report.cloud]
            title = "From file"
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__REPORT__CLOUD__TITLE", "From env");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.report.cloud.title, "From env");
    assert_eq!(config.log.level, "debug");
}

/// Test that a file that fails validation is rejected.
#[test]
fn test_load_config_failing_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "wordtally.toml",
            r#"
            [report.cloud]
            min_font_px = 50
            max_font_px = 20
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_VALIDATION");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "invalid.toml",
            r#"
            [report
            limit = twenty"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test missing files and unsupported extensions.
#[test]
fn test_load_missing_or_unsupported_file() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.path("absent.toml");
    let loader = ConfigLoader::new(Some(&missing), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));

    let ini = fixture.write_file("settings.ini", "limit=3").unwrap();
    let loader = ConfigLoader::new(Some(&ini), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let loader = ConfigLoader::new(None::<&Path>, "TEST_NO_FILE");
    assert_eq!(loader.load().unwrap(), WordTallyConfig::default());
}

/// Test that a generated configuration loads back unchanged.
#[test]
fn test_generated_config_round_trip() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&WordTallyConfig::default()).unwrap();
    let config_path = fixture.write_file("generated.toml", toml).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_GENERATED");
    assert_eq!(loader.load().unwrap(), WordTallyConfig::default());
}
