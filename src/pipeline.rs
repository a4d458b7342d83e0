//! Collect-then-aggregate orchestration.
//!
//! Phase one parses every review in order and maps each sentence to
//! aspect records. Phase two reduces the finished record collection into
//! a summary; it never starts before phase one has returned.

use crate::analysis::{build_summary, AspectMatcher, MatchSettings};
use crate::lexicon::Lexicon;
use crate::models::{AspectRecord, AspectSummary, Review, RunStats};
use crate::parser::SentenceAnalyzer;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Records of a whole run, plus counters.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub records: Vec<AspectRecord>,
    pub stats: RunStats,
}

impl Collected {
    /// Reduce the collected records into a summary.
    pub fn summarize(&self) -> AspectSummary {
        build_summary(&self.records)
    }
}

/// Parse every review and gather the aspect records of all sentences.
///
/// A parser failure aborts the whole run.
pub async fn collect_records<A: SentenceAnalyzer>(
    analyzer: &A,
    reviews: &[Review],
    lexicon: &Lexicon,
    settings: &MatchSettings,
    show_progress: bool,
) -> Result<Collected> {
    let matcher = AspectMatcher::new(lexicon, settings);
    let mut collected = Collected::default();

    let progress_bar = if show_progress {
        let pb = ProgressBar::new(reviews.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} reviews ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for (i, review) in reviews.iter().enumerate() {
        debug!("Processing review #{}", i + 1);

        let sentences = analyzer
            .analyze(&review.content)
            .await
            .with_context(|| format!("Failed to parse review #{}", i + 1))?;

        for sentence in &sentences {
            collected.records.extend(matcher.extract_sentence(sentence));
        }

        collected.stats.documents += 1;
        collected.stats.sentences += sentences.len();

        if let Some(ref pb) = progress_bar {
            pb.inc(1);
        }
    }

    collected.stats.records = collected.records.len();

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    info!(
        "Collected {} aspect records from {} sentences in {} reviews",
        collected.stats.records, collected.stats.sentences, collected.stats.documents
    );

    Ok(collected)
}
