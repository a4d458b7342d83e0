//! Subject/adjective matching over dependency relations.
//!
//! A record is produced for every nominal-subject relation whose governor
//! mentions a lexicon adjective and whose dependent is a noun of the same
//! sentence.

use crate::analysis::candidates::{adjective_candidates, noun_candidates};
use crate::analysis::normalizer::SubjectNormalizer;
use crate::lexicon::Lexicon;
use crate::models::{AspectRecord, DependencyRelation, ParsedSentence, Polarity, TaggedToken};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a relation's governor text is compared with a candidate adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GovernorMatch {
    /// Governor text contains the adjective.
    #[default]
    Substring,
    /// Governor text equals the adjective.
    Exact,
}

/// What to do when the governor text is in neither lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolarity {
    /// Use the polarity of the matched adjective.
    #[default]
    Adjective,
    /// Classify as negative.
    Negative,
    /// Emit no record.
    Skip,
}

/// Matching rules applied to every sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSettings {
    /// Relation name of the nominal-subject link.
    pub nominal_subject: String,
    pub governor_match: GovernorMatch,
    pub unmatched_polarity: UnmatchedPolarity,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            nominal_subject: "nsubj".to_string(),
            governor_match: GovernorMatch::default(),
            unmatched_polarity: UnmatchedPolarity::default(),
        }
    }
}

/// Turns parsed sentences into aspect records.
#[derive(Debug)]
pub struct AspectMatcher<'a> {
    lexicon: &'a Lexicon,
    settings: &'a MatchSettings,
    normalizer: SubjectNormalizer,
}

impl<'a> AspectMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon, settings: &'a MatchSettings) -> Self {
        Self {
            lexicon,
            settings,
            normalizer: SubjectNormalizer::new(),
        }
    }

    /// Filter candidates and match them against the sentence's relations.
    pub fn extract_sentence(&self, sentence: &ParsedSentence) -> Vec<AspectRecord> {
        let adjectives = adjective_candidates(&sentence.tokens, self.lexicon);
        if adjectives.is_empty() {
            return Vec::new();
        }
        let nouns = noun_candidates(&sentence.tokens);

        self.match_relations(&sentence.relations, &adjectives, &nouns)
    }

    /// Scan relations for the subject-linking pattern.
    pub fn match_relations(
        &self,
        relations: &[DependencyRelation],
        adjectives: &[&TaggedToken],
        nouns: &[&TaggedToken],
    ) -> Vec<AspectRecord> {
        let mut records = Vec::new();

        for relation in relations
            .iter()
            .filter(|r| r.relation == self.settings.nominal_subject)
        {
            for adjective in adjectives {
                if !self.governor_mentions(&relation.governor, &adjective.surface) {
                    continue;
                }
                if !nouns.iter().any(|n| n.surface == relation.dependent) {
                    continue;
                }

                let Some(polarity) = self.classify(&relation.governor, &adjective.surface) else {
                    debug!(
                        "Skipping '{}': governor '{}' in neither lexicon",
                        relation.dependent, relation.governor
                    );
                    continue;
                };

                let raw_subject = relation.dependent.to_lowercase();
                let record = AspectRecord {
                    polarity,
                    canonical_subject: self.normalizer.canonicalize(&raw_subject),
                    raw_subject,
                    adjectives: [adjective.surface.clone()].into_iter().collect(),
                };

                debug!(
                    "{} subject '{}' attributes {:?}",
                    record.polarity,
                    record.canonical_subject,
                    record.adjectives
                );
                records.push(record);
            }
        }

        records
    }

    fn governor_mentions(&self, governor: &str, adjective: &str) -> bool {
        match self.settings.governor_match {
            GovernorMatch::Substring => governor.contains(adjective),
            GovernorMatch::Exact => governor == adjective,
        }
    }

    /// The full governor text decides first; the policy covers governors
    /// found in neither list.
    fn classify(&self, governor: &str, adjective: &str) -> Option<Polarity> {
        if self.lexicon.is_positive(governor) {
            return Some(Polarity::Positive);
        }
        match self.settings.unmatched_polarity {
            UnmatchedPolarity::Negative => Some(Polarity::Negative),
            _ if self.lexicon.is_negative(governor) => Some(Polarity::Negative),
            UnmatchedPolarity::Adjective if self.lexicon.is_positive(adjective) => {
                Some(Polarity::Positive)
            }
            UnmatchedPolarity::Adjective => Some(Polarity::Negative),
            UnmatchedPolarity::Skip => None,
        }
    }
}
