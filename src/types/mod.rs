//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `payout`: Payout method types, detail payloads and batch records
//! - `validation`: Field and aggregate validation results
//! - `error`: Error types for the batch pipeline

pub mod error;
pub mod payout;
pub mod validation;

pub use error::{PipelineError, UnknownMethodType};
pub use payout::{
    BankTransferDetails, PayoutDetails, PayoutMethodSubmission, PayoutMethodType, PayoutRecord,
    TypedPayoutDetails,
};
pub use validation::{Advisory, AggregateValidation, FieldError, Reason, ValidationResult};
