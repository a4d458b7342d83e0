//! Report output.

pub mod generator;

pub use generator::{generate_csv_report, generate_json_report, write_report, CsvOptions};
