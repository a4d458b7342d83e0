//! AspectScope - aspect-level sentiment for review collections
//!
//! A CLI tool that parses reviews with a CoreNLP server, links opinion
//! adjectives to the nouns they describe, and writes a per-subject
//! positive/negative report.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (lexicon, corpus, parser, or report failure)

mod analysis;
mod cli;
mod config;
mod corpus;
mod lexicon;
mod models;
mod parser;
mod pipeline;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::{Config, CONFIG_FILE_NAME};
use lexicon::Lexicon;
use models::{Report, ReportMetadata};
use parser::{CoreNlpAnalyzer, SentenceAnalyzer};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Load configuration before logging so the file can set verbosity
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    // Initialize logging
    init_logging(args.log_level(config.general.verbose));

    info!("AspectScope v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    match run(args, config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .aspectscope.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to set lexicon paths, the CoreNLP URL, and matching rules.");
    Ok(())
}

/// Initialize logging at the resolved level.
fn init_logging(level: tracing::Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the complete extraction: load, parse and match, aggregate, report.
async fn run(args: Args, config: Config) -> Result<()> {
    let start_time = Instant::now();

    let input = args
        .input
        .clone()
        .context("An input path is required")?;

    // Step 1: Load lexicons and reviews
    let lexicon = Lexicon::load(&config.lexicon.positive, &config.lexicon.negative)?;
    info!(
        "Lexicon: {} positive, {} negative words",
        lexicon.positive_len(),
        lexicon.negative_len()
    );

    println!("📥 Loading reviews from: {}", input.display());
    let reviews = corpus::load_reviews(&input)?;
    info!("Loaded {} reviews", reviews.len());

    if args.dry_run {
        return handle_dry_run(&reviews, &lexicon);
    }

    // Step 2: Parse and match, one review at a time
    let analyzer = CoreNlpAnalyzer::new(config.corenlp_config())
        .context("Failed to create CoreNLP client")?;
    let settings = config.match_settings();

    println!("🔬 Extracting aspects with {}...", analyzer.describe());
    let collected =
        pipeline::collect_records(&analyzer, &reviews, &lexicon, &settings, !args.quiet).await?;

    let (positive_records, negative_records) = analysis::polarity_counts(&collected.records);
    debug!(
        "{} positive and {} negative records over {} subjects",
        positive_records,
        negative_records,
        analysis::distinct_subjects(&collected.records).len()
    );

    // Step 3: Aggregate only after every review has been processed
    let summary = collected.summarize();
    if summary.is_empty() {
        warn!("No aspects were found in the input");
    } else {
        info!("Aggregated {} subject/polarity entries", summary.len());
    }
    let positive_subjects = summary.positive.len();
    let negative_subjects = summary.negative.len();

    // Step 4: Render and write the report
    println!("📝 Generating report...");
    let output_path = PathBuf::from(&config.general.output);
    let output = match args.format {
        OutputFormat::Csv => report::generate_csv_report(&summary, config.csv_options()),
        OutputFormat::Json => {
            let report = Report {
                metadata: ReportMetadata {
                    input: input.display().to_string(),
                    analysis_date: Utc::now(),
                    parser: analyzer.describe(),
                    documents: collected.stats.documents,
                    sentences: collected.stats.sentences,
                    records: collected.stats.records,
                    duration_seconds: start_time.elapsed().as_secs_f64(),
                },
                summary,
            };
            report::generate_json_report(&report)?
        }
    };

    report::write_report(&output, &output_path)?;

    // Print summary
    println!("\n📊 Summary:");
    println!("   Reviews: {}", collected.stats.documents);
    println!("   Sentences: {}", collected.stats.sentences);
    println!("   Aspect records: {}", collected.stats.records);
    println!(
        "   Positive subjects: {} | Negative subjects: {}",
        positive_subjects,
        negative_subjects
    );
    println!("   Duration: {:.1}s", start_time.elapsed().as_secs_f64());
    println!("\n✅ Done! Report saved to: {}", output_path.display());

    Ok(())
}

/// Handle --dry-run: report what would be processed, no parser calls.
fn handle_dry_run(reviews: &[models::Review], lexicon: &Lexicon) -> Result<()> {
    let empty = reviews
        .iter()
        .filter(|r| r.content.trim().is_empty())
        .count();

    println!("\n🔍 Dry run (no parser calls)...\n");
    println!("   Reviews: {} ({} empty)", reviews.len(), empty);
    println!(
        "   Lexicon: {} positive, {} negative words",
        lexicon.positive_len(),
        lexicon.negative_len()
    );
    println!("\n✅ Dry run complete.");
    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Runs before logging is set up, so problems go straight to stderr.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("⚠️  Failed to load {}: {:#}. Using defaults.", CONFIG_FILE_NAME, e);
            Ok(Config::default())
        }
    }
}
