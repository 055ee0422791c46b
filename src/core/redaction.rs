//! Redaction formatter
//!
//! Produces display copies of stored payout details with sensitive values masked. The
//! input is never modified, unknown method types pass through unchanged, and fields that
//! are absent or empty are left as they are.

use crate::types::payout::fields;
use crate::types::{PayoutDetails, PayoutMethodType};

const MASK: &str = "****";
/// Leading characters of an email local part left readable
const EMAIL_VISIBLE_CHARS: usize = 2;
/// Trailing digits of bank numbers left readable
const BANK_VISIBLE_DIGITS: usize = 4;
const STRIPE_VISIBLE_PREFIX: usize = 10;
const STRIPE_VISIBLE_SUFFIX: usize = 4;

/// Return a copy of `details` with the fields sensitive for `method_type` masked
pub fn sanitize_payout_details(method_type: &str, details: &PayoutDetails) -> PayoutDetails {
    let mut sanitized = details.clone();

    let Ok(method_type) = method_type.parse::<PayoutMethodType>() else {
        return sanitized;
    };

    match method_type {
        PayoutMethodType::Paypal | PayoutMethodType::Wise => {
            mask_field(&mut sanitized, fields::EMAIL, mask_email);
        }
        PayoutMethodType::BankTransfer => {
            mask_field(&mut sanitized, fields::ACCOUNT_NUMBER, mask_bank_number);
            mask_field(&mut sanitized, fields::ROUTING_NUMBER, mask_bank_number);
        }
        PayoutMethodType::Stripe => {
            mask_field(&mut sanitized, fields::ACCOUNT_ID, mask_stripe_account_id);
        }
    }

    sanitized
}

fn mask_field(details: &mut PayoutDetails, field: &str, mask: fn(&str) -> String) {
    if let Some(value) = details.get_mut(field).filter(|v| !v.is_empty()) {
        let masked = mask(value);
        *value = masked;
    }
}

/// Keep the first two characters of the local part and star out the rest
///
/// At least one star is always written so that short local parts are not shown in full.
/// An empty local part yields `@domain`; a value without `@` is masked as a bare local part.
pub fn mask_email(email: &str) -> String {
    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (email, None),
    };

    let local_length = local.chars().count();
    let mut masked: String = local.chars().take(EMAIL_VISIBLE_CHARS).collect();
    if local_length > 0 {
        let hidden = local_length.saturating_sub(EMAIL_VISIBLE_CHARS).max(1);
        masked.push_str(&"*".repeat(hidden));
    }

    if let Some(domain) = domain {
        masked.push('@');
        masked.push_str(domain);
    }
    masked
}

/// `****` followed by the last four digits, ignoring ASCII spaces and hyphens
pub fn mask_bank_number(number: &str) -> String {
    let cleaned: Vec<char> = number.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let start = cleaned.len().saturating_sub(BANK_VISIBLE_DIGITS);
    let last: String = cleaned[start..].iter().collect();
    format!("{MASK}{last}")
}

/// First ten characters, `****`, then the last four
///
/// Ids too short to hide anything between the two ends show only `****` and the last four.
pub fn mask_stripe_account_id(account_id: &str) -> String {
    let chars: Vec<char> = account_id.chars().collect();
    let suffix_start = chars.len().saturating_sub(STRIPE_VISIBLE_SUFFIX);
    let suffix: String = chars[suffix_start..].iter().collect();

    if chars.len() <= STRIPE_VISIBLE_PREFIX + STRIPE_VISIBLE_SUFFIX {
        return format!("{MASK}{suffix}");
    }

    let prefix: String = chars[..STRIPE_VISIBLE_PREFIX].iter().collect();
    format!("{prefix}{MASK}{suffix}")
}
