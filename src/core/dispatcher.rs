//! Method dispatcher
//!
//! Selects the validators that apply to a payout method type and runs every one of them,
//! so the caller receives the complete set of field errors in a single pass.

use crate::core::validators::{
    disposable_email_advisory, validate_account_holder_name, validate_bank_account_number,
    validate_bank_name, validate_paypal_email, validate_routing_number,
    validate_stripe_account_id, validate_wise_email,
};
use crate::types::payout::fields;
use crate::types::{
    AggregateValidation, FieldError, PayoutDetails, PayoutMethodSubmission, PayoutMethodType,
    TypedPayoutDetails,
};
use tracing::debug;

/// Validate an untyped payout method as received from a caller
///
/// An unrecognized `method_type` yields a single error keyed `type`.
pub fn validate_payout_method(method_type: &str, details: &PayoutDetails) -> AggregateValidation {
    match method_type.parse::<PayoutMethodType>() {
        Ok(method_type) => {
            TypedPayoutDetails::from_untyped(method_type, details).validate()
        }
        Err(err) => {
            debug!(%err, "Rejecting payout method");
            let mut validation = AggregateValidation::new();
            validation.record(fields::TYPE, Err(FieldError::invalid_type()));
            validation
        }
    }
}

impl TypedPayoutDetails {
    /// Run every validator that applies to this method type
    pub fn validate(&self) -> AggregateValidation {
        let mut validation = AggregateValidation::new();

        match self {
            TypedPayoutDetails::Paypal { email } => {
                validation.record(fields::EMAIL, validate_paypal_email(email));
                if let Some(advisory) = disposable_email_advisory(email) {
                    debug!(advisory = advisory.as_str(), "PayPal email uses a disposable domain");
                    validation.warn(fields::EMAIL, advisory);
                }
            }
            TypedPayoutDetails::BankTransfer(bank) => {
                validation.record(
                    fields::ACCOUNT_HOLDER_NAME,
                    validate_account_holder_name(&bank.account_holder_name),
                );
                validation.record(
                    fields::ACCOUNT_NUMBER,
                    validate_bank_account_number(&bank.account_number),
                );
                validation.record(
                    fields::ROUTING_NUMBER,
                    validate_routing_number(&bank.routing_number),
                );
                validation.record(fields::BANK_NAME, validate_bank_name(&bank.bank_name));
            }
            TypedPayoutDetails::Stripe { account_id } => {
                validation.record(fields::ACCOUNT_ID, validate_stripe_account_id(account_id));
            }
            TypedPayoutDetails::Wise { email } => {
                validation.record(fields::EMAIL, validate_wise_email(email));
            }
        }

        for (field, error) in validation.errors() {
            debug!(
                method_type = %self.method_type(),
                field = *field,
                reason = %error.reason,
                "Payout method field rejected"
            );
        }

        validation
    }
}

impl PayoutMethodSubmission {
    pub fn validate(&self) -> AggregateValidation {
        validate_payout_method(&self.method_type, &self.details)
    }
}
