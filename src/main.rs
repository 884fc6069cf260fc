//! Wordtally - Main entrypoint.
//!
//! Loads configuration, initializes logging, counts the words of a text file
//! and prints or exports the result.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use wordtally_lib::config::{self, ConfigLoader, LogConfig, WordTallyConfig};
use wordtally_lib::data_structures::WordCountTrie;
use wordtally_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, TracingErrorReporter, WordTallyError,
    WordTallyResult,
};
use wordtally_lib::report::{self, cloud, ReportFormat};
use wordtally_lib::text::WordLoader;

/// Command line arguments for Wordtally.
#[derive(Parser, Debug)]
#[clap(name = "wordtally", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every word with its count, most frequent first
    Count {
        /// Text file to read
        #[clap(value_parser)]
        input: PathBuf,

        /// Stop-word list, overriding the configured one
        #[clap(short, long, value_parser)]
        stop_words: Option<PathBuf>,

        /// Only print the N most frequent words
        #[clap(short, long)]
        limit: Option<usize>,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = ReportFormat::Plain)]
        format: ReportFormat,
    },

    /// Write an HTML word cloud of the most frequent words
    Cloud {
        /// Text file to read
        #[clap(value_parser)]
        input: PathBuf,

        /// Number of words to include
        limit: usize,

        /// HTML file to write
        #[clap(value_parser)]
        output: PathBuf,

        /// Stop-word list, overriding the configured one
        #[clap(short, long, value_parser)]
        stop_words: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so that listings on stdout stay clean.
fn init_logging(log: &LogConfig) -> WordTallyResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        WordTallyError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Picks the explicit config path, or the default file when it exists.
fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let default = PathBuf::from(config::DEFAULT_CONFIG_PATH);
        default.exists().then_some(default)
    })
}

/// Counts the words of `input` into a fresh trie.
fn count_file(
    config: &WordTallyConfig,
    input: &Path,
    stop_words: Option<PathBuf>,
) -> WordTallyResult<WordCountTrie> {
    let mut tokenizer = config.tokenizer.clone();
    if stop_words.is_some() {
        tokenizer.stop_words = stop_words;
    }

    let mut loader = WordLoader::from_config(tokenizer)?;
    let mut trie = WordCountTrie::new();
    let stats = loader.load_file(input, &mut trie)?;

    info!(
        input = %input.display(),
        tokens = stats.tokens_seen,
        distinct = trie.len(),
        nodes = trie.count_nodes(),
        "Counted words"
    );
    Ok(trie)
}

fn run(command: Command, loaded: WordTallyResult<WordTallyConfig>) -> WordTallyResult<()> {
    match command {
        Command::Count {
            input,
            stop_words,
            limit,
            format,
        } => {
            let config = loaded?;
            let trie = count_file(&config, &input, stop_words)?;
            let entries = report::top_words(
                trie.list_by_descending_count(),
                limit.or(config.report.limit),
            );
            print!("{}", report::render(&entries, format)?);
            Ok(())
        }
        Command::Cloud {
            input,
            limit,
            output,
            stop_words,
        } => {
            let config = loaded?;
            let trie = count_file(&config, &input, stop_words)?;
            let entries = report::top_words(trie.list_by_descending_count(), Some(limit));
            let html = cloud::render_html(&entries, &config.report.cloud);
            report::write_report(&output, &html)?;
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = WordTallyConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| WordTallyError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(config_path(args.config), config::ENV_PREFIX);
    let loaded = loader.load().map_err(WordTallyError::from);

    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }

    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(error) = run(args.command, loaded) {
        get_error_reporting().report(ErrorContext::new(error, "cli"));
        process::exit(1);
    }
}
