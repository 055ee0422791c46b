//! Field validators
//!
//! One pure function per data shape. Each returns at most one [`FieldError`], checking its
//! rules in a fixed order so that the first violated rule is the one reported.

use crate::types::{Advisory, FieldError, Reason, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::error;

/// Maximum length of a whole email address
pub const EMAIL_MAX_LENGTH: usize = 254;
/// Maximum length of the part before the first `@`
pub const EMAIL_LOCAL_MAX_LENGTH: usize = 64;
/// Minimum and maximum trimmed length of holder and bank names
pub const NAME_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 2..=100;
/// Allowed length of a cleaned bank account number
pub const ACCOUNT_NUMBER_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 4..=17;
pub const ROUTING_NUMBER_LENGTH: usize = 9;
pub const STRIPE_ACCOUNT_PREFIX: &str = "acct_";
/// `acct_` plus at least 20 identifier characters
pub const STRIPE_ACCOUNT_MIN_LENGTH: usize = 25;

/// Mailbox providers flagged by [`disposable_email_advisory`]
pub const DISPOSABLE_EMAIL_DOMAINS: [&str; 3] =
    ["tempmail.com", "guerrillamail.com", "mailinator.com"];

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .map_err(|err| error!(?err, "Failed to compile email regex"))
    .ok()
});

const EMAIL_REQUIRED: FieldError = FieldError::new(Reason::Empty, "Email is required");
const EMAIL_FORMAT: FieldError = FieldError::new(Reason::Format, "Invalid email format");
const EMAIL_TOO_LONG: FieldError = FieldError::new(Reason::Length, "Email address is too long");
const EMAIL_LOCAL_TOO_LONG: FieldError =
    FieldError::new(Reason::Length, "Email local part is too long");

/// Remove the ASCII spaces and hyphens users type as digit-group separators
///
/// Any other whitespace (tabs, newlines, no-break spaces) is kept and fails the digit check.
fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validate an email address against an RFC 5322 approximation
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return Err(EMAIL_REQUIRED);
    }

    let matches = EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email));
    if !matches {
        return Err(EMAIL_FORMAT);
    }

    if email.chars().count() > EMAIL_MAX_LENGTH {
        return Err(EMAIL_TOO_LONG);
    }

    let local = email.split('@').next().unwrap_or_default();
    if local.chars().count() > EMAIL_LOCAL_MAX_LENGTH {
        return Err(EMAIL_LOCAL_TOO_LONG);
    }

    Ok(())
}

/// ABA weighted checksum: `3*(d0+d3+d6) + 7*(d1+d4+d7) + (d2+d5+d8)` modulo 10
///
/// Expects exactly nine ASCII digits.
pub fn aba_checksum(digits: &[u8; ROUTING_NUMBER_LENGTH]) -> u32 {
    const WEIGHTS: [u32; 3] = [3, 7, 1];

    digits
        .iter()
        .enumerate()
        .map(|(i, d)| WEIGHTS[i % 3] * u32::from(d - b'0'))
        .sum::<u32>()
        % 10
}

/// Federal Reserve routing symbol ranges: 01-12, 21-32, 61-72 and 80
fn is_assigned_bank_code(prefix: u32) -> bool {
    matches!(prefix, 1..=12 | 21..=32 | 61..=72 | 80)
}

/// Validate a nine-digit US ABA bank routing number
pub fn validate_routing_number(routing_number: &str) -> ValidationResult {
    let cleaned = strip_separators(routing_number);
    if cleaned.is_empty() {
        return Err(FieldError::new(Reason::Empty, "Routing number is required"));
    }

    let digits: [u8; ROUTING_NUMBER_LENGTH] = match cleaned.as_bytes().try_into() {
        Ok(digits) if is_ascii_digits(&cleaned) => digits,
        _ => {
            return Err(FieldError::new(
                Reason::Format,
                "Routing number must be exactly 9 digits",
            ))
        }
    };

    if aba_checksum(&digits) != 0 {
        return Err(FieldError::new(
            Reason::Checksum,
            "Invalid routing number checksum",
        ));
    }

    let prefix = u32::from(digits[0] - b'0') * 10 + u32::from(digits[1] - b'0');
    if !is_assigned_bank_code(prefix) {
        return Err(FieldError::new(
            Reason::BankCode,
            "Invalid routing number bank code",
        ));
    }

    Ok(())
}

/// Validate a bank account number: 4 to 17 digits once separators are removed
pub fn validate_bank_account_number(account_number: &str) -> ValidationResult {
    let cleaned = strip_separators(account_number);
    if cleaned.is_empty() {
        return Err(FieldError::new(Reason::Empty, "Account number is required"));
    }

    if !is_ascii_digits(&cleaned) || !ACCOUNT_NUMBER_LENGTH_RANGE.contains(&cleaned.len()) {
        return Err(FieldError::new(
            Reason::Format,
            "Account number must be 4 to 17 digits",
        ));
    }

    Ok(())
}

/// Validate the name on a bank account
///
/// Letters of any script are accepted, along with spaces, hyphens, apostrophes and periods.
pub fn validate_account_holder_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(
            Reason::Empty,
            "Account holder name is required",
        ));
    }

    if !NAME_LENGTH_RANGE.contains(&trimmed.chars().count()) {
        return Err(FieldError::new(
            Reason::Length,
            "Account holder name must be 2 to 100 characters",
        ));
    }

    let allowed = |c: char| c.is_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | '.');
    if !trimmed.chars().all(allowed) {
        return Err(FieldError::new(
            Reason::Charset,
            "Account holder name contains invalid characters",
        ));
    }

    Ok(())
}

pub fn validate_bank_name(bank_name: &str) -> ValidationResult {
    let trimmed = bank_name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(Reason::Empty, "Bank name is required"));
    }

    if !NAME_LENGTH_RANGE.contains(&trimmed.chars().count()) {
        return Err(FieldError::new(
            Reason::Length,
            "Bank name must be 2 to 100 characters",
        ));
    }

    Ok(())
}

/// Validate a Stripe Connect account id such as `acct_1A2b3C4d5E6f7G8h9I0j`
pub fn validate_stripe_account_id(account_id: &str) -> ValidationResult {
    let trimmed = account_id.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(
            Reason::Empty,
            "Stripe account ID is required",
        ));
    }

    let Some(identifier) = trimmed.strip_prefix(STRIPE_ACCOUNT_PREFIX) else {
        return Err(FieldError::new(
            Reason::Prefix,
            "Stripe account ID must start with 'acct_'",
        ));
    };

    if trimmed.chars().count() < STRIPE_ACCOUNT_MIN_LENGTH {
        return Err(FieldError::new(
            Reason::Length,
            "Stripe account ID is too short",
        ));
    }

    if !identifier.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FieldError::new(
            Reason::Charset,
            "Stripe account ID contains invalid characters",
        ));
    }

    Ok(())
}

/// Validate a PayPal login email
///
/// Disposable domains are accepted here; see [`disposable_email_advisory`].
pub fn validate_paypal_email(email: &str) -> ValidationResult {
    validate_email(email)
}

/// Validate a Wise account email
pub fn validate_wise_email(email: &str) -> ValidationResult {
    validate_email(email)
}

/// Flag throwaway-mailbox domains without rejecting the address
pub fn disposable_email_advisory(email: &str) -> Option<Advisory> {
    let (_, domain) = email.trim().rsplit_once('@')?;
    let domain = domain.to_ascii_lowercase();

    DISPOSABLE_EMAIL_DOMAINS
        .contains(&domain.as_str())
        .then_some(Advisory::DisposableDomain)
}
