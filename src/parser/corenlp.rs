//! Stanford CoreNLP server client.
//!
//! Posts raw review text to a running CoreNLP server with the
//! `tokenize,ssplit,pos,depparse` annotators and maps the JSON response
//! into [`ParsedSentence`] values.

use crate::models::{DependencyRelation, ParsedSentence, TaggedToken};
use crate::parser::{AnalyzerError, SentenceAnalyzer};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the CoreNLP client.
#[derive(Debug, Clone)]
pub struct CoreNlpConfig {
    pub url: String,
    pub timeout_seconds: u64,
    /// Which dependency list of the response to read.
    pub dependencies: String,
}

impl Default for CoreNlpConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000".to_string(),
            timeout_seconds: 120,
            dependencies: "enhancedPlusPlusDependencies".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CoreNlpResponse {
    #[serde(default)]
    sentences: Vec<CoreNlpSentence>,
}

#[derive(Debug, Deserialize)]
struct CoreNlpSentence {
    #[serde(default)]
    tokens: Vec<CoreNlpToken>,
    /// The dependency lists, keyed by annotation name.
    #[serde(flatten)]
    annotations: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CoreNlpToken {
    index: usize,
    word: String,
    #[serde(rename = "originalText", default)]
    original_text: Option<String>,
    #[serde(default)]
    pos: String,
}

#[derive(Debug, Deserialize)]
struct CoreNlpDependency {
    dep: String,
    governor: usize,
    #[serde(rename = "governorGloss")]
    governor_gloss: String,
    #[serde(rename = "dependentGloss")]
    dependent_gloss: String,
}

/// Sentence analyzer backed by a CoreNLP HTTP server.
pub struct CoreNlpAnalyzer {
    config: CoreNlpConfig,
    http_client: reqwest::Client,
}

impl CoreNlpAnalyzer {
    pub fn new(config: CoreNlpConfig) -> Result<Self, AnalyzerError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn properties(&self) -> String {
        json!({
            "annotators": "tokenize,ssplit,pos,depparse",
            "outputFormat": "json",
        })
        .to_string()
    }

    fn map_send_error(&self, e: reqwest::Error) -> AnalyzerError {
        if e.is_timeout() {
            AnalyzerError::Timeout(self.config.timeout_seconds)
        } else if e.is_connect() {
            AnalyzerError::Connect(self.config.url.clone())
        } else {
            AnalyzerError::Request(e)
        }
    }
}

impl SentenceAnalyzer for CoreNlpAnalyzer {
    fn describe(&self) -> String {
        format!("CoreNLP ({})", self.config.url)
    }

    async fn analyze(&self, text: &str) -> Result<Vec<ParsedSentence>, AnalyzerError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .http_client
            .post(&self.config.url)
            .query(&[("properties", self.properties())])
            .body(text.to_string())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Status { status, body });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let sentences = sentences_from_response(&body, &self.config.dependencies)?;
        debug!("Parsed {} sentences", sentences.len());

        Ok(sentences)
    }
}

/// Map a CoreNLP JSON response into parsed sentences.
///
/// Governor text is the governor token's original text when the index
/// resolves, else the gloss. The ROOT pseudo-relation is dropped.
pub fn sentences_from_response(
    body: &str,
    dependencies: &str,
) -> Result<Vec<ParsedSentence>, AnalyzerError> {
    let response: CoreNlpResponse =
        serde_json::from_str(body).map_err(|e| AnalyzerError::Response(e.to_string()))?;

    response
        .sentences
        .into_iter()
        .map(|sentence| convert_sentence(sentence, dependencies))
        .collect()
}

fn convert_sentence(
    mut sentence: CoreNlpSentence,
    dependencies: &str,
) -> Result<ParsedSentence, AnalyzerError> {
    let raw_dependencies = match sentence.annotations.remove(dependencies) {
        Some(value) => serde_json::from_value::<Vec<CoreNlpDependency>>(value)
            .map_err(|e| AnalyzerError::Response(format!("{}: {}", dependencies, e)))?,
        None => {
            return Err(AnalyzerError::Response(format!(
                "sentence has no '{}' annotation",
                dependencies
            )))
        }
    };

    let original_text: HashMap<usize, &str> = sentence
        .tokens
        .iter()
        .map(|t| (t.index, t.original_text.as_deref().unwrap_or(&t.word)))
        .collect();

    let relations = raw_dependencies
        .iter()
        .filter(|d| d.dep != "ROOT")
        .map(|d| {
            let governor = original_text
                .get(&d.governor)
                .map(|s| s.to_string())
                .unwrap_or_else(|| d.governor_gloss.clone());
            DependencyRelation::new(d.dep.clone(), governor, d.dependent_gloss.clone())
        })
        .collect();

    let tokens = sentence
        .tokens
        .iter()
        .map(|t| TaggedToken::new(t.word.clone(), t.pos.clone()))
        .collect();

    Ok(ParsedSentence { tokens, relations })
}
