//! Core validation logic
//!
//! This module contains the payout method components:
//! - `validators` - Pure field validators, one per data shape
//! - `dispatcher` - Runs the validators applicable to a method type and aggregates errors
//! - `redaction` - Masks sensitive detail fields for display
//! - `report` - Per-record validation report used by the batch pipeline
//! - `batch` - Concurrent validation of record batches

pub mod batch;
pub mod dispatcher;
pub mod redaction;
pub mod report;
pub mod validators;

pub use batch::BatchValidator;
pub use dispatcher::validate_payout_method;
pub use redaction::sanitize_payout_details;
pub use report::ValidationReport;
pub use validators::{
    disposable_email_advisory, validate_account_holder_name, validate_bank_account_number,
    validate_bank_name, validate_email, validate_paypal_email, validate_routing_number,
    validate_stripe_account_id, validate_wise_email,
};
