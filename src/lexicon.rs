//! Positive and negative opinion word lists.
//!
//! Lexicons are loaded once at startup from line-delimited files and
//! passed to the pipeline as an immutable value.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Immutable sets of positive and negative surface forms.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from in-memory word lists.
    #[cfg(test)]
    pub fn from_words<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Load both word lists from disk.
    pub fn load(positive_path: &Path, negative_path: &Path) -> Result<Self> {
        let positive = read_word_list(positive_path)?;
        let negative = read_word_list(negative_path)?;

        if positive.is_empty() {
            warn!("Positive lexicon is empty: {}", positive_path.display());
        }
        if negative.is_empty() {
            warn!("Negative lexicon is empty: {}", negative_path.display());
        }

        debug!(
            "Loaded lexicon: {} positive, {} negative words",
            positive.len(),
            negative.len()
        );

        Ok(Self { positive, negative })
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// True if the word is in either list.
    pub fn contains(&self, word: &str) -> bool {
        self.is_positive(word) || self.is_negative(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

/// Read one word per line, skipping blanks and `;` comment lines.
fn read_word_list(path: &Path) -> Result<HashSet<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(String::from)
        .collect())
}
