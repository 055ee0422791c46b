//! CSV format handling for payout records and validation reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Report row serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::ValidationReport;
use crate::types::payout::fields;
use crate::types::{PayoutDetails, PayoutRecord};
use serde::Deserialize;

/// Column names of the report CSV, in output order
pub const REPORT_HEADER: [&str; 6] = ["row", "type", "valid", "errors", "warnings", "details"];

/// Separator between pairs in the `errors`, `warnings` and `details` columns
const PAIR_SEPARATOR: &str = "|";

/// CSV record structure for deserialization
///
/// Every detail column is optional: a column may be missing from the header, and an empty
/// cell means the key is absent from the details.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type", default)]
    pub method_type: String,
    pub email: Option<String>,
    pub account_holder_name: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub swift_code: Option<String>,
    pub iban: Option<String>,
    pub account_id: Option<String>,
}

/// Convert a CsvRecord into a PayoutRecord numbered `row`
///
/// The method type is carried as read; unrecognized types are reported by validation.
pub fn convert_csv_record(row: u64, csv_record: CsvRecord) -> PayoutRecord {
    let columns = [
        (fields::EMAIL, csv_record.email),
        (fields::ACCOUNT_HOLDER_NAME, csv_record.account_holder_name),
        (fields::BANK_NAME, csv_record.bank_name),
        (fields::ACCOUNT_NUMBER, csv_record.account_number),
        (fields::ROUTING_NUMBER, csv_record.routing_number),
        (fields::SWIFT_CODE, csv_record.swift_code),
        (fields::IBAN, csv_record.iban),
        (fields::ACCOUNT_ID, csv_record.account_id),
    ];

    let details: PayoutDetails = columns
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v))
        })
        .collect();

    PayoutRecord {
        row,
        method_type: csv_record.method_type,
        details,
    }
}

/// Backslash-escape `\`, `|` and `=` so a value cannot forge extra pairs
fn escape_pair_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '|' | '=') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn join_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(key, value)| format!("{}={}", key, escape_pair_value(value)))
        .collect::<Vec<_>>()
        .join(PAIR_SEPARATOR)
}

/// Render a report as one CSV row matching [`REPORT_HEADER`]
pub fn report_to_csv_row(report: &ValidationReport) -> [String; 6] {
    let validation = &report.validation;

    [
        report.row.to_string(),
        report.method_type.clone(),
        validation.is_valid().to_string(),
        join_pairs(
            validation
                .errors()
                .iter()
                .map(|(field, error)| (*field, error.reason.as_str())),
        ),
        join_pairs(
            validation
                .warnings()
                .iter()
                .map(|(field, advisory)| (*field, advisory.as_str())),
        ),
        join_pairs(
            report
                .details
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        ),
    ]
}
