//! Validation result types
//!
//! Validation failures are plain values, never panics or `Err` of the pipeline. A single
//! field check yields a [`ValidationResult`]; the method dispatcher folds those into an
//! [`AggregateValidation`] carrying every failing field at once.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Why a field was rejected
///
/// Each validator reports at most one reason per call: the first violated rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reason {
    /// Missing, empty or whitespace-only value
    Empty,
    /// Value does not have the expected shape
    Format,
    /// Value is too short or too long
    Length,
    /// Value contains characters outside the allowed set
    Charset,
    /// ABA weighted checksum is not a multiple of ten
    Checksum,
    /// Routing number prefix is not an assigned Federal Reserve range
    BankCode,
    /// Value lacks its mandatory literal prefix
    Prefix,
    /// The payout method type itself is not recognized
    InvalidType,
}

impl Reason {
    /// Stable machine-readable code for this reason
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Empty => "empty",
            Reason::Format => "format",
            Reason::Length => "length",
            Reason::Charset => "charset",
            Reason::Checksum => "checksum",
            Reason::BankCode => "bank_code",
            Reason::Prefix => "prefix",
            Reason::InvalidType => "invalid_type",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected field value
///
/// Pairs the machine-readable [`Reason`] with the message shown next to the form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Rule that rejected the value
    pub reason: Reason,
    /// Human-readable explanation
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(reason: Reason, message: &'static str) -> Self {
        Self { reason, message }
    }

    /// The error recorded under the `type` key for unrecognized payout method types
    pub const fn invalid_type() -> Self {
        Self::new(Reason::InvalidType, "invalid type")
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message)
    }
}

/// Outcome of a single field validator
///
/// `Err` is present if and only if the value is invalid.
pub type ValidationResult = Result<(), FieldError>;

/// Non-blocking signal attached to an otherwise accepted field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// The email domain belongs to a known throwaway-mailbox provider
    DisposableDomain,
}

impl Advisory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Advisory::DisposableDomain => "disposable_domain",
        }
    }
}

/// Result of validating a whole payout method
///
/// Field names map to the first rule each field violated. Warnings never affect validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateValidation {
    errors: BTreeMap<&'static str, FieldError>,
    warnings: BTreeMap<&'static str, Advisory>,
}

impl AggregateValidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, FieldError> {
        &self.errors
    }

    pub fn warnings(&self) -> &BTreeMap<&'static str, Advisory> {
        &self.warnings
    }

    /// Error for a single field, if it failed
    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Record the outcome of one field check
    pub fn record(&mut self, field: &'static str, result: ValidationResult) {
        if let Err(error) = result {
            self.errors.insert(field, error);
        }
    }

    pub fn warn(&mut self, field: &'static str, advisory: Advisory) {
        self.warnings.insert(field, advisory);
    }

    /// Field-to-message map, the shape a form renders next to each input
    pub fn error_messages(&self) -> BTreeMap<&'static str, &'static str> {
        self.errors
            .iter()
            .map(|(field, error)| (*field, error.message))
            .collect()
    }

    /// Body of a rejected submission: `{"error": "Validation failed", "details": {...}}`
    ///
    /// Returns `None` when the payout method is valid.
    pub fn rejection_body(&self) -> Option<serde_json::Value> {
        if self.is_valid() {
            return None;
        }
        Some(serde_json::json!({
            "error": "Validation failed",
            "details": self.error_messages(),
        }))
    }
}

impl Serialize for AggregateValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("is_valid", &self.is_valid())?;
        map.serialize_entry("errors", &self.errors)?;
        map.serialize_entry("warnings", &self.warnings)?;
        map.end()
    }
}
