//! Aspect aggregation.
//!
//! Folds the full record collection of a run into one entry per
//! (subject, polarity) pair. The input is only read; the summary is
//! rebuilt from scratch on every call.

use crate::models::{AggregateEntry, AspectRecord, AspectSummary, Polarity};
use std::collections::{BTreeMap, BTreeSet};

/// Build ranked positive and negative entries from all records.
pub fn build_summary(records: &[AspectRecord]) -> AspectSummary {
    AspectSummary {
        positive: aggregate_polarity(records, Polarity::Positive),
        negative: aggregate_polarity(records, Polarity::Negative),
    }
}

/// Aggregate the records of one polarity.
///
/// Subjects are compared case-insensitively. Records with an empty
/// adjective set do not count toward the weight, and subjects that end up
/// with no adjectives are dropped.
pub fn aggregate_polarity(records: &[AspectRecord], polarity: Polarity) -> Vec<AggregateEntry> {
    let mut grouped: BTreeMap<String, (BTreeSet<String>, usize)> = BTreeMap::new();

    for record in records
        .iter()
        .filter(|r| r.polarity == polarity && !r.adjectives.is_empty())
    {
        let (adjectives, weight) = grouped
            .entry(record.canonical_subject.to_lowercase())
            .or_default();
        adjectives.extend(record.adjectives.iter().cloned());
        *weight += 1;
    }

    let mut entries: Vec<AggregateEntry> = grouped
        .into_iter()
        .filter(|(_, (adjectives, _))| !adjectives.is_empty())
        .map(|(subject, (adjectives, weight))| AggregateEntry {
            canonical_subject: subject,
            polarity,
            adjectives,
            weight,
        })
        .collect();

    rank_entries(&mut entries);
    entries
}

/// Heaviest first; ties keep subject order.
pub fn rank_entries(entries: &mut [AggregateEntry]) {
    entries.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.canonical_subject.cmp(&b.canonical_subject))
    });
}

/// Distinct canonical subjects across the collection, lowercased.
pub fn distinct_subjects(records: &[AspectRecord]) -> BTreeSet<String> {
    records
        .iter()
        .map(|r| r.canonical_subject.to_lowercase())
        .collect()
}

/// Number of records per polarity.
pub fn polarity_counts(records: &[AspectRecord]) -> (usize, usize) {
    records
        .iter()
        .fold((0, 0), |(pos, neg), r| match r.polarity {
            Polarity::Positive => (pos + 1, neg),
            Polarity::Negative => (pos, neg + 1),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str, polarity: Polarity, adjectives: &[&str]) -> AspectRecord {
        AspectRecord {
            polarity,
            raw_subject: subject.to_lowercase(),
            canonical_subject: subject.to_string(),
            adjectives: adjectives.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_weight_counts_records() {
        let records = vec![
            record("room", Polarity::Positive, &["clean"]),
            record("room", Polarity::Positive, &["spacious"]),
            record("room", Polarity::Positive, &["clean"]),
        ];

        let summary = build_summary(&records);

        assert_eq!(summary.positive.len(), 1);
        assert!(summary.negative.is_empty());
        let entry = &summary.positive[0];
        assert_eq!(entry.canonical_subject, "room");
        assert_eq!(entry.weight, 3);
        assert_eq!(
            entry.adjectives.iter().collect::<Vec<_>>(),
            vec!["clean", "spacious"]
        );
    }

    #[test]
    fn test_subjects_case_insensitive() {
        let records = vec![
            record("Room", Polarity::Negative, &["dirty"]),
            record("room", Polarity::Negative, &["small"]),
        ];

        let summary = build_summary(&records);

        assert_eq!(summary.negative.len(), 1);
        assert_eq!(summary.negative[0].weight, 2);
        assert_eq!(distinct_subjects(&records).len(), 1);
    }

    #[test]
    fn test_polarities_are_separate_entries() {
        let records = vec![
            record("staff", Polarity::Positive, &["friendly"]),
            record("staff", Polarity::Negative, &["rude"]),
        ];

        let summary = build_summary(&records);

        assert_eq!(summary.positive.len(), 1);
        assert_eq!(summary.negative.len(), 1);
        assert_eq!(summary.positive[0].polarity, Polarity::Positive);
        assert_eq!(summary.negative[0].polarity, Polarity::Negative);
    }

    #[test]
    fn test_empty_adjective_sets_are_dropped() {
        let records = vec![
            record("pool", Polarity::Positive, &[]),
            record("bed", Polarity::Positive, &["comfortable"]),
            record("bed", Polarity::Positive, &[]),
        ];

        let summary = build_summary(&records);

        assert_eq!(summary.positive.len(), 1);
        assert_eq!(summary.positive[0].canonical_subject, "bed");
        assert_eq!(summary.positive[0].weight, 1);
    }

    #[test]
    fn test_order_independent() {
        let records = vec![
            record("room", Polarity::Positive, &["clean"]),
            record("staff", Polarity::Negative, &["rude"]),
            record("view", Polarity::Positive, &["stunning"]),
            record("room", Polarity::Positive, &["quiet"]),
            record("staff", Polarity::Negative, &["slow"]),
        ];
        let mut reversed = records.clone();
        reversed.reverse();
        let mut rotated = records.clone();
        rotated.rotate_left(2);

        let expected = build_summary(&records);
        assert_eq!(build_summary(&reversed), expected);
        assert_eq!(build_summary(&rotated), expected);
    }

    #[test]
    fn test_ranked_by_weight_then_subject() {
        let records = vec![
            record("view", Polarity::Positive, &["stunning"]),
            record("bed", Polarity::Positive, &["comfy"]),
            record("room", Polarity::Positive, &["clean"]),
            record("room", Polarity::Positive, &["quiet"]),
        ];

        let subjects: Vec<String> = aggregate_polarity(&records, Polarity::Positive)
            .into_iter()
            .map(|e| e.canonical_subject)
            .collect();

        assert_eq!(subjects, vec!["room", "bed", "view"]);
    }

    #[test]
    fn test_polarity_counts() {
        let records = vec![
            record("room", Polarity::Positive, &["clean"]),
            record("staff", Polarity::Negative, &["rude"]),
            record("view", Polarity::Positive, &["stunning"]),
        ];
        assert_eq!(polarity_counts(&records), (2, 1));
        assert_eq!(polarity_counts(&[]), (0, 0));
    }
}
