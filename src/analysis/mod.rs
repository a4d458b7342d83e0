//! Aspect extraction and aggregation.
//!
//! Candidate filtering, relation matching and subject normalization turn
//! one parsed sentence into records; the aggregator reduces the records of
//! a whole run into a summary.

pub mod aggregator;
pub mod candidates;
pub mod matcher;
pub mod normalizer;

pub use aggregator::{build_summary, distinct_subjects, polarity_counts};
pub use matcher::{AspectMatcher, GovernorMatch, MatchSettings, UnmatchedPolarity};
