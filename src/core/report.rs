//! Per-record validation report
//!
//! Combines the dispatcher and the redaction formatter so that a batch result never
//! carries the raw detail values it was computed from.

use crate::core::dispatcher::validate_payout_method;
use crate::core::redaction::sanitize_payout_details;
use crate::types::{AggregateValidation, PayoutDetails, PayoutRecord};
use serde::Serialize;

/// Validation outcome of one payout record, with its details already redacted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub row: u64,
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(flatten)]
    pub validation: AggregateValidation,
    pub details: PayoutDetails,
}

impl ValidationReport {
    pub fn evaluate(record: &PayoutRecord) -> Self {
        Self {
            row: record.row,
            method_type: record.method_type.clone(),
            validation: validate_payout_method(&record.method_type, &record.details),
            details: sanitize_payout_details(&record.method_type, &record.details),
        }
    }
}
