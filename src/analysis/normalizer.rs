//! Subject normalization.

use rust_stemmers::{Algorithm, Stemmer};

/// Reduces subject words to a canonical stem used as the grouping key.
pub struct SubjectNormalizer {
    stemmer: Stemmer,
}

impl std::fmt::Debug for SubjectNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubjectNormalizer").finish()
    }
}

impl Default for SubjectNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectNormalizer {
    /// English Snowball (Porter2) stemmer.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Lowercase and stem a subject word.
    ///
    /// Stemming is repeated until the result is stable, so a canonical
    /// form always canonicalizes to itself. Snowball never lengthens a
    /// word, which bounds the loop.
    pub fn canonicalize(&self, word: &str) -> String {
        let mut stem = word.to_lowercase();
        loop {
            let next = self.stemmer.stem(&stem).into_owned();
            if next == stem {
                return stem;
            }
            stem = next;
        }
    }
}
