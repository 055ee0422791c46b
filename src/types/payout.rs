//! Payout method types and their detail payloads
//!
//! Details arrive from callers as an untyped key-value map ([`PayoutDetails`]). Validation
//! lifts them into [`TypedPayoutDetails`], a tagged union where each method type carries
//! exactly the fields it requires.

use crate::types::error::UnknownMethodType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Untyped detail payload as submitted by a caller or stored in a database row
pub type PayoutDetails = BTreeMap<String, String>;

/// Field names used as keys in [`PayoutDetails`] and in validation error maps
pub mod fields {
    pub const TYPE: &str = "type";
    pub const EMAIL: &str = "email";
    pub const ACCOUNT_HOLDER_NAME: &str = "account_holder_name";
    pub const BANK_NAME: &str = "bank_name";
    pub const ACCOUNT_NUMBER: &str = "account_number";
    pub const ROUTING_NUMBER: &str = "routing_number";
    pub const SWIFT_CODE: &str = "swift_code";
    pub const IBAN: &str = "iban";
    pub const ACCOUNT_ID: &str = "account_id";
}

/// Destination kind for platform earnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethodType {
    Paypal,
    BankTransfer,
    Stripe,
    Wise,
}

impl PayoutMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutMethodType::Paypal => "paypal",
            PayoutMethodType::BankTransfer => "bank_transfer",
            PayoutMethodType::Stripe => "stripe",
            PayoutMethodType::Wise => "wise",
        }
    }
}

impl fmt::Display for PayoutMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutMethodType {
    type Err = UnknownMethodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paypal" => Ok(PayoutMethodType::Paypal),
            "bank_transfer" => Ok(PayoutMethodType::BankTransfer),
            "stripe" => Ok(PayoutMethodType::Stripe),
            "wise" => Ok(PayoutMethodType::Wise),
            _ => Err(UnknownMethodType {
                value: s.to_string(),
            }),
        }
    }
}

/// Bank account destination
///
/// `swift_code` and `iban` are not validated and remain only in [`PayoutDetails`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankTransferDetails {
    pub account_holder_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub routing_number: String,
}

/// Detail payload with its shape fixed by the method type
///
/// A required key missing from the untyped map becomes an empty string, which every
/// validator rejects as `empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedPayoutDetails {
    Paypal { email: String },
    BankTransfer(BankTransferDetails),
    Stripe { account_id: String },
    Wise { email: String },
}

impl TypedPayoutDetails {
    /// Lift an untyped payload into the shape required by `method_type`
    ///
    /// Keys that do not belong to the method type are ignored.
    pub fn from_untyped(method_type: PayoutMethodType, details: &PayoutDetails) -> Self {
        let required = |key: &str| details.get(key).cloned().unwrap_or_default();

        match method_type {
            PayoutMethodType::Paypal => TypedPayoutDetails::Paypal {
                email: required(fields::EMAIL),
            },
            PayoutMethodType::BankTransfer => TypedPayoutDetails::BankTransfer(BankTransferDetails {
                account_holder_name: required(fields::ACCOUNT_HOLDER_NAME),
                bank_name: required(fields::BANK_NAME),
                account_number: required(fields::ACCOUNT_NUMBER),
                routing_number: required(fields::ROUTING_NUMBER),
            }),
            PayoutMethodType::Stripe => TypedPayoutDetails::Stripe {
                account_id: required(fields::ACCOUNT_ID),
            },
            PayoutMethodType::Wise => TypedPayoutDetails::Wise {
                email: required(fields::EMAIL),
            },
        }
    }

    pub fn method_type(&self) -> PayoutMethodType {
        match self {
            TypedPayoutDetails::Paypal { .. } => PayoutMethodType::Paypal,
            TypedPayoutDetails::BankTransfer(_) => PayoutMethodType::BankTransfer,
            TypedPayoutDetails::Stripe { .. } => PayoutMethodType::Stripe,
            TypedPayoutDetails::Wise { .. } => PayoutMethodType::Wise,
        }
    }
}

/// Request body for creating or updating a payout method
///
/// `method_type` stays a raw string so that unrecognized types reach validation and are
/// reported as a field error instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutMethodSubmission {
    pub user_id: String,
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(default)]
    pub details: PayoutDetails,
    #[serde(default)]
    pub is_default: bool,
}

/// One payout method read from a batch input, numbered by its position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutRecord {
    /// 1-based data row number
    pub row: u64,
    /// Method type tag as read, possibly unrecognized
    pub method_type: String,
    pub details: PayoutDetails,
}
