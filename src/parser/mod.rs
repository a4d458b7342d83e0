//! Syntactic analysis boundary.
//!
//! The extractor never tags or parses text itself. It asks a
//! [`SentenceAnalyzer`] for tagged tokens and dependency relations, one
//! [`ParsedSentence`] per sentence of the input text.

pub mod corenlp;

pub use corenlp::{CoreNlpAnalyzer, CoreNlpConfig};

use crate::models::ParsedSentence;
use thiserror::Error;

/// Failures of the parsing collaborator. All of them abort the run.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("cannot connect to parser at {0}")]
    Connect(String),

    #[error("parser request timed out after {0}s")]
    Timeout(u64),

    #[error("parser returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed parser response: {0}")]
    Response(String),

    #[error("parser request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Splits text into sentences and parses each one.
#[allow(async_fn_in_trait)] // only used through generics inside this binary
pub trait SentenceAnalyzer {
    /// Short description of the backend, for logs and report metadata.
    fn describe(&self) -> String;

    /// Segment, tag and parse `text`, returning sentences in text order.
    async fn analyze(&self, text: &str) -> Result<Vec<ParsedSentence>, AnalyzerError>;
}
