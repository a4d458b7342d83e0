//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::analysis::{GovernorMatch, UnmatchedPolarity};
use clap::Parser;
use std::path::PathBuf;

/// AspectScope - aspect-level sentiment for review collections
///
/// Finds the nouns reviewers talk about and the opinion adjectives
/// attached to them, then reports positive and negative aspects with
/// their adjectives and mention counts.
///
/// Examples:
///   aspectscope --input reviews/100407.json
///   aspectscope --input reviews/ --positive positive-words.txt --negative negative-words.txt
///   aspectscope --input reviews/ --format json --output report.json
///   aspectscope --input reviews/ --dry-run
///   aspectscope --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Review collection: a JSON file or a directory of JSON files
    #[arg(short, long, value_name = "PATH", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Output file path for the report
    ///
    /// Defaults to the config file value or aspect_report.csv
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Positive opinion lexicon (one word per line)
    #[arg(long, value_name = "FILE")]
    pub positive: Option<PathBuf>,

    /// Negative opinion lexicon (one word per line)
    #[arg(long, value_name = "FILE")]
    pub negative: Option<PathBuf>,

    /// CoreNLP server URL
    #[arg(long, value_name = "URL", env = "ASPECTSCOPE_CORENLP_URL")]
    pub corenlp_url: Option<String>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .aspectscope.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (csv, json)
    #[arg(long, default_value = "csv", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Parser request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// How governor text is compared with adjectives
    #[arg(long, value_name = "MODE")]
    pub governor_match: Option<GovernorMatch>,

    /// Polarity for governors found in neither lexicon
    #[arg(long, value_name = "POLICY")]
    pub unmatched_polarity: Option<UnmatchedPolarity>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run: load reviews and lexicons without calling the parser
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .aspectscope.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated report (default)
    #[default]
    Csv,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if let Some(ref url) = self.corenlp_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("CoreNLP URL must start with 'http://' or 'https://'".to_string());
            }
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(format!("Input path does not exist: {}", input.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// `config_verbose` is the config file's `general.verbose`; `--quiet`
    /// overrides it.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            input: None,
            output: None,
            positive: None,
            negative: None,
            corenlp_url: None,
            config: None,
            format: OutputFormat::Csv,
            timeout: None,
            governor_match: None,
            unmatched_polarity: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = Args::try_parse_from([
            "aspectscope",
            "--input",
            "reviews.json",
            "--format",
            "json",
            "--governor-match",
            "exact",
            "--unmatched-polarity",
            "skip",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("reviews.json")));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.governor_match, Some(GovernorMatch::Exact));
        assert_eq!(args.unmatched_polarity, Some(UnmatchedPolarity::Skip));
    }

    #[test]
    fn test_input_required_unless_init_config() {
        assert!(Args::try_parse_from(["aspectscope"]).is_err());
        assert!(Args::try_parse_from(["aspectscope", "--init-config"]).is_ok());
    }

    #[test]
    fn test_validation_invalid_url() {
        let mut args = make_args();
        args.corenlp_url = Some("localhost:9000".to_string());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_input() {
        let mut args = make_args();
        args.input = Some(PathBuf::from("/nonexistent/reviews.json"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(false), tracing::Level::INFO);
        assert_eq!(args.log_level(true), tracing::Level::DEBUG);

        args.verbose = true;
        assert_eq!(args.log_level(false), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(true), tracing::Level::ERROR);
    }
}
