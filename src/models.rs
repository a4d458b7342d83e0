//! Data models for the aspect extractor.
//!
//! This module contains the core data structures used throughout the
//! pipeline: parser output, per-sentence aspect records, aggregated
//! entries, and report bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single token with its part-of-speech tag, as produced by the tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form of the token.
    pub surface: String,
    /// Penn Treebank tag (e.g. `JJ`, `NNS`).
    pub tag: String,
}

impl TaggedToken {
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }
}

/// A typed grammatical link between two words of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRelation {
    /// Relation name from the parser's vocabulary (e.g. `nsubj`).
    pub relation: String,
    /// Text of the governing word.
    pub governor: String,
    /// Text of the dependent word.
    pub dependent: String,
}

impl DependencyRelation {
    pub fn new(
        relation: impl Into<String>,
        governor: impl Into<String>,
        dependent: impl Into<String>,
    ) -> Self {
        Self {
            relation: relation.into(),
            governor: governor.into(),
            dependent: dependent.into(),
        }
    }
}

/// Parser output for one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub tokens: Vec<TaggedToken>,
    pub relations: Vec<DependencyRelation>,
}

/// Sentiment polarity assigned by lexicon lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Numeric code used in the CSV report.
    pub fn code(&self) -> i8 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "Positive"),
            Polarity::Negative => write!(f, "Negative"),
        }
    }
}

/// One matched (subject, adjective) pair from a single sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRecord {
    /// Polarity of the governing adjective.
    pub polarity: Polarity,
    /// Dependent word, lowercased.
    pub raw_subject: String,
    /// Stemmed form of `raw_subject`; the only grouping key downstream.
    pub canonical_subject: String,
    /// Matched adjectives (a singleton at creation).
    pub adjectives: BTreeSet<String>,
}

/// Aggregated sentiment for one (subject, polarity) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEntry {
    pub canonical_subject: String,
    pub polarity: Polarity,
    /// Union of the adjectives of every contributing record.
    pub adjectives: BTreeSet<String>,
    /// Number of records folded into this entry.
    pub weight: usize,
}

/// Ranked aggregate entries, split by polarity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectSummary {
    pub positive: Vec<AggregateEntry>,
    pub negative: Vec<AggregateEntry>,
}

impl AspectSummary {
    /// Total number of entries across both polarities.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// A single review document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "Content", default)]
    pub content: String,
}

/// Counters collected while processing the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub documents: usize,
    pub sentences: usize,
    pub records: usize,
}

/// Metadata about a report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the analyzed review collection.
    pub input: String,
    /// Date and time of the analysis.
    pub analysis_date: DateTime<Utc>,
    /// Parser endpoint used.
    pub parser: String,
    pub documents: usize,
    pub sentences: usize,
    pub records: usize,
    /// Duration of the run in seconds.
    pub duration_seconds: f64,
}

/// The complete aspect sentiment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub summary: AspectSummary,
}
