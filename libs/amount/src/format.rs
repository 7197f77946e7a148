//! Human-readable amount formatting
//!
//! Display helpers never round a value up: fractional digits beyond a token's
//! precision are cut off (`Rounding::Down`).

use crate::fixed::Rounding;
use crate::number::{is_good_bignumber, BigNumber};
use tracing::trace;

/// Default precision for [`format_amount`] (18-decimal tokens)
pub const DEFAULT_FORMAT_DECIMALS: u32 = 18;

/// Default precision for [`amount`] (9-decimal native tokens)
pub const DEFAULT_TOKEN_DECIMALS: u32 = 9;

/// Format a positive amount, truncated to `decimals` fractional digits
///
/// Returns `None` for NaN, infinite, zero or negative values: such amounts
/// are never displayable.
pub fn format_amount(value: &str, decimals: u32) -> Option<String> {
    let parsed = BigNumber::parse(value);
    if !is_good_bignumber(&parsed, true) {
        return None;
    }
    Some(truncate_to(parsed, decimals).to_string())
}

/// Truncate user input to `decimals` fractional digits
///
/// Input that is not a positive number (an empty field, a lone `-`, `"0."`
/// while typing) is handed back verbatim, as is input that already fits.
pub fn truncate_decimals(value: Option<&str>, decimals: Option<u32>) -> Option<String> {
    let value = value?;
    let parsed = BigNumber::parse(value);
    if !is_good_bignumber(&parsed, true) {
        trace!(value, "passing through non-positive input");
        return Some(value.to_string());
    }

    match decimals {
        Some(decimals) if parsed.decimal_places().is_some_and(|dp| dp > decimals) => {
            Some(truncate_to(parsed, decimals).to_string())
        }
        _ => Some(value.to_string()),
    }
}

/// Render a base-unit amount as a grouped human amount
///
/// Divides by `10^decimals` and inserts `,` every three integer digits. Zero
/// or absent input renders as `"0"`; a non-finite value renders as an empty
/// string.
pub fn amount(value: Option<&str>, decimals: u32) -> String {
    let parsed = value.map(BigNumber::parse).unwrap_or_default();
    if parsed.is_zero() {
        return "0".to_string();
    }

    let human = parsed.shifted_by(-i64::from(decimals));
    if !human.is_finite() {
        trace!(?value, "amount is not finite");
        return String::new();
    }
    group_thousands(&human.to_string())
}

/// Same as [`amount`] but never empty
pub fn amount_or_zero(value: Option<&str>, decimals: u32) -> String {
    let formatted = amount(value, decimals);
    if formatted.is_empty() {
        "0".to_string()
    } else {
        formatted
    }
}

/// Insert `,` separators into the integer part of a fixed-point string
pub fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn truncate_to(value: BigNumber, decimals: u32) -> BigNumber {
    match value.decimal_places() {
        Some(dp) if dp > decimals => value.round_dp(decimals, Rounding::Down),
        _ => value,
    }
}
