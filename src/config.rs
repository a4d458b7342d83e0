//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.aspectscope.toml` files.

use crate::analysis::{GovernorMatch, MatchSettings, UnmatchedPolarity};
use crate::parser::CoreNlpConfig;
use crate::report::CsvOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".aspectscope.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Lexicon locations.
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Parser settings.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Matching rules.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "aspect_report.csv".to_string()
}

/// Opinion lexicon files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Line-delimited positive words.
    #[serde(default = "default_positive")]
    pub positive: PathBuf,

    /// Line-delimited negative words.
    #[serde(default = "default_negative")]
    pub negative: PathBuf,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive: default_positive(),
            negative: default_negative(),
        }
    }
}

fn default_positive() -> PathBuf {
    PathBuf::from("positive-words.txt")
}

fn default_negative() -> PathBuf {
    PathBuf::from("negative-words.txt")
}

/// CoreNLP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// CoreNLP server URL.
    #[serde(default = "default_corenlp_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Dependency annotation to read from each parsed sentence.
    #[serde(default = "default_dependencies")]
    pub dependencies: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            url: default_corenlp_url(),
            timeout_seconds: default_timeout(),
            dependencies: default_dependencies(),
        }
    }
}

fn default_corenlp_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_dependencies() -> String {
    "enhancedPlusPlusDependencies".to_string()
}

/// Aspect matching rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Relation name linking a predicate to its subject.
    #[serde(default = "default_nominal_subject")]
    pub nominal_subject: String,

    /// `substring` or `exact` comparison of governor and adjective.
    #[serde(default)]
    pub governor_match: GovernorMatch,

    /// `adjective`, `negative` or `skip` for governors in neither lexicon.
    #[serde(default)]
    pub unmatched_polarity: UnmatchedPolarity,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            nominal_subject: default_nominal_subject(),
            governor_match: GovernorMatch::default(),
            unmatched_polarity: UnmatchedPolarity::default(),
        }
    }
}

fn default_nominal_subject() -> String {
    "nsubj".to_string()
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Upper-case subjects of positive rows.
    #[serde(default = "default_true")]
    pub uppercase_positive: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            uppercase_positive: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }
        if args.verbose {
            self.general.verbose = true;
        }
        if args.quiet {
            self.general.verbose = false;
        }

        if let Some(ref positive) = args.positive {
            self.lexicon.positive = positive.clone();
        }
        if let Some(ref negative) = args.negative {
            self.lexicon.negative = negative.clone();
        }

        if let Some(ref url) = args.corenlp_url {
            self.parser.url = url.clone();
        }
        if let Some(timeout) = args.timeout {
            self.parser.timeout_seconds = timeout;
        }

        if let Some(governor_match) = args.governor_match {
            self.matching.governor_match = governor_match;
        }
        if let Some(unmatched) = args.unmatched_polarity {
            self.matching.unmatched_polarity = unmatched;
        }
    }

    /// Matching rules for the pipeline.
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            nominal_subject: self.matching.nominal_subject.clone(),
            governor_match: self.matching.governor_match,
            unmatched_polarity: self.matching.unmatched_polarity,
        }
    }

    /// Client settings for the CoreNLP analyzer.
    pub fn corenlp_config(&self) -> CoreNlpConfig {
        CoreNlpConfig {
            url: self.parser.url.clone(),
            timeout_seconds: self.parser.timeout_seconds,
            dependencies: self.parser.dependencies.clone(),
        }
    }

    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            uppercase_positive: self.report.uppercase_positive,
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.parser.url, "http://localhost:9000");
        assert_eq!(config.matching.nominal_subject, "nsubj");
        assert_eq!(config.matching.governor_match, GovernorMatch::Substring);
        assert_eq!(config.matching.unmatched_polarity, UnmatchedPolarity::Adjective);
        assert!(config.report.uppercase_positive);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "hotel.csv"

[lexicon]
positive = "lex/pos.txt"

[parser]
url = "http://corenlp:9000"
dependencies = "basicDependencies"

[matching]
governor_match = "exact"
unmatched_polarity = "skip"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output, "hotel.csv");
        assert_eq!(config.lexicon.positive, PathBuf::from("lex/pos.txt"));
        assert_eq!(config.lexicon.negative, PathBuf::from("negative-words.txt"));
        assert_eq!(config.parser.url, "http://corenlp:9000");
        assert_eq!(config.parser.timeout_seconds, 120);
        assert_eq!(config.matching.governor_match, GovernorMatch::Exact);
        assert_eq!(config.matching.unmatched_polarity, UnmatchedPolarity::Skip);

        let settings = config.match_settings();
        assert_eq!(settings.governor_match, GovernorMatch::Exact);
        assert_eq!(config.corenlp_config().dependencies, "basicDependencies");
    }

    #[test]
    fn test_verbose_setting_controls_log_level() {
        use crate::cli::Args;
        use clap::Parser;

        let mut config: Config = toml::from_str("[general]\nverbose = true\n").unwrap();
        let args = Args::try_parse_from(["aspectscope", "--input", "reviews.json"]).unwrap();
        config.merge_with_args(&args);
        assert!(config.general.verbose);
        assert_eq!(args.log_level(config.general.verbose), tracing::Level::DEBUG);

        let quiet =
            Args::try_parse_from(["aspectscope", "--input", "reviews.json", "--quiet"]).unwrap();
        config.merge_with_args(&quiet);
        assert!(!config.general.verbose);
        assert_eq!(quiet.log_level(config.general.verbose), tracing::Level::ERROR);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[lexicon]"));
        assert!(toml_str.contains("[parser]"));
        assert!(toml_str.contains("[matching]"));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.parser.url, "http://localhost:9000");
    }
}
