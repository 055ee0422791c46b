//! Payout Method Validator Library
//! # Overview
//!
//! This library validates the payout methods artists submit (PayPal, bank transfer,
//! Stripe Connect, Wise) and produces redacted copies of their details for display. A
//! streaming CSV pipeline with sync and async strategies runs the same checks over files
//! of stored methods.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (PayoutMethodType, FieldError, AggregateValidation, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::validators`] - Field validators (email, ABA routing number, account number, etc.)
//!   - [`core::dispatcher`] - Per-method validation with complete error aggregation
//!   - [`core::redaction`] - Masking of sensitive fields
//! - [`io`] - CSV input and report output
//! - [`strategy`] - Pluggable processing strategies
//!
//! # Payout Methods
//!
//! | Type            | Validated fields                                              |
//! |-----------------|---------------------------------------------------------------|
//! | `paypal`        | `email`                                                       |
//! | `bank_transfer` | `account_holder_name`, `bank_name`, `account_number`, `routing_number` |
//! | `stripe`        | `account_id`                                                  |
//! | `wise`          | `email`                                                       |
//!
//! ```
//! use payout_method_validator::{sanitize_payout_details, validate_payout_method, PayoutDetails};
//!
//! let mut details = PayoutDetails::new();
//! details.insert("email".to_string(), "artist@example.com".to_string());
//!
//! assert!(validate_payout_method("paypal", &details).is_valid());
//! assert_eq!(
//!     sanitize_payout_details("paypal", &details)["email"],
//!     "ar****@example.com"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{sanitize_payout_details, validate_payout_method, ValidationReport};
pub use strategy::{create_strategy, ProcessingStrategy, ProcessingSummary};
pub use types::{
    Advisory, AggregateValidation, FieldError, PayoutDetails, PayoutMethodSubmission,
    PayoutMethodType, PipelineError, Reason, TypedPayoutDetails, ValidationResult,
};
