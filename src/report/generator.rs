//! Report rendering.
//!
//! The CSV layout is the one consumed by the downstream visualization:
//! a header row, then every positive entry, then every negative entry.

use crate::models::{AggregateEntry, AspectSummary, Polarity, Report};
use anyhow::{Context, Result};
use std::path::Path;

/// Header row of the CSV report.
pub const CSV_HEADER: &str = "Polarity,Subject,Attributes,Weight";

/// Rendering options for the CSV report.
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Upper-case the subject of positive rows.
    pub uppercase_positive: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            uppercase_positive: true,
        }
    }
}

/// Generate the complete CSV report.
pub fn generate_csv_report(summary: &AspectSummary, options: CsvOptions) -> String {
    let mut output = String::new();

    output.push_str(CSV_HEADER);
    output.push('\n');

    for entry in summary.positive.iter().chain(summary.negative.iter()) {
        output.push_str(&generate_csv_row(entry, options));
        output.push('\n');
    }

    output
}

/// Render one entry, e.g. `1, ROOM ,"clean spacious ",4`.
fn generate_csv_row(entry: &AggregateEntry, options: CsvOptions) -> String {
    let subject = match entry.polarity {
        Polarity::Positive if options.uppercase_positive => entry.canonical_subject.to_uppercase(),
        _ => entry.canonical_subject.clone(),
    };

    format!(
        "{}, {} ,{},{}",
        entry.polarity.code(),
        subject,
        quote_attributes(entry),
        entry.weight
    )
}

/// Space-separated adjectives, each followed by a space, in double quotes.
fn quote_attributes(entry: &AggregateEntry) -> String {
    let mut attributes = String::from("\"");
    for adjective in &entry.adjectives {
        attributes.push_str(adjective);
        attributes.push(' ');
    }
    attributes.push('"');
    attributes
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write a rendered report in one go.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportMetadata;
    use chrono::Utc;

    fn entry(subject: &str, polarity: Polarity, adjectives: &[&str], weight: usize) -> AggregateEntry {
        AggregateEntry {
            canonical_subject: subject.to_string(),
            polarity,
            adjectives: adjectives.iter().map(|a| a.to_string()).collect(),
            weight,
        }
    }

    fn create_test_summary() -> AspectSummary {
        AspectSummary {
            positive: vec![entry("room", Polarity::Positive, &["spacious", "clean"], 4)],
            negative: vec![entry("staff", Polarity::Negative, &["slow", "rude"], 2)],
        }
    }

    #[test]
    fn test_generate_csv_report() {
        let csv = generate_csv_report(&create_test_summary(), CsvOptions::default());

        assert_eq!(
            csv,
            "Polarity,Subject,Attributes,Weight\n\
             1, ROOM ,\"clean spacious \",4\n\
             -1, staff ,\"rude slow \",2\n"
        );
    }

    #[test]
    fn test_positive_block_precedes_negative() {
        let summary = AspectSummary {
            positive: vec![
                entry("room", Polarity::Positive, &["clean"], 2),
                entry("view", Polarity::Positive, &["stunning"], 1),
            ],
            negative: vec![entry("bed", Polarity::Negative, &["hard"], 5)],
        };

        let csv = generate_csv_report(&summary, CsvOptions::default());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("1, ROOM "));
        assert!(lines[2].starts_with("1, VIEW "));
        assert!(lines[3].starts_with("-1, bed "));
    }

    #[test]
    fn test_empty_summary_has_header_only() {
        let csv = generate_csv_report(&AspectSummary::default(), CsvOptions::default());
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_uppercase_can_be_disabled() {
        let options = CsvOptions {
            uppercase_positive: false,
        };
        let csv = generate_csv_report(&create_test_summary(), options);
        assert!(csv.contains("1, room ,"));
    }

    #[test]
    fn test_generate_json_report() {
        let report = Report {
            metadata: ReportMetadata {
                input: "reviews.json".to_string(),
                analysis_date: Utc::now(),
                parser: "CoreNLP (http://localhost:9000)".to_string(),
                documents: 3,
                sentences: 10,
                records: 6,
                duration_seconds: 1.5,
            },
            summary: create_test_summary(),
        };

        let json = generate_json_report(&report).unwrap();

        assert!(json.contains("\"metadata\""));
        assert!(json.contains("\"positive\""));
        assert!(json.contains("\"canonical_subject\": \"room\""));
        assert!(json.contains("\"polarity\": \"negative\""));
    }
}
