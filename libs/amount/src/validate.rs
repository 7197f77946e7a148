//! Range checks against configured bounds
//!
//! Bounds are expressed in base units. When `decimals` is given, the checked
//! value is a human amount and is scaled by `10^decimals` before comparison.

use crate::number::{is_good_bignumber, BigNumber};
use std::cmp::Ordering;
use tracing::debug;

/// Passes iff `value` (scaled by `decimals`) is at least `min_value`
///
/// An absent or empty bound always passes. A bound that is not a finite,
/// non-negative number fails closed.
pub fn validate_min_value(
    min_value: Option<&str>,
    value: Option<&str>,
    decimals: Option<u32>,
) -> bool {
    check_bound(min_value, value, decimals, false, |ordering| {
        ordering != Ordering::Less
    })
}

/// Passes iff `value` (scaled by `decimals`) is at most `max_value`
///
/// An absent or empty bound always passes. A bound that is not a finite,
/// strictly positive number fails closed.
pub fn validate_max_value(
    max_value: Option<&str>,
    value: Option<&str>,
    decimals: Option<u32>,
) -> bool {
    check_bound(max_value, value, decimals, true, |ordering| {
        ordering != Ordering::Greater
    })
}

fn check_bound(
    bound: Option<&str>,
    value: Option<&str>,
    decimals: Option<u32>,
    non_zero_bound: bool,
    accept: impl Fn(Ordering) -> bool,
) -> bool {
    let Some(bound) = bound.filter(|bound| !bound.is_empty()) else {
        return true;
    };

    let parsed_bound = BigNumber::parse(bound);
    let limit = match parsed_bound.finite() {
        Some(limit) if is_good_bignumber(&parsed_bound, non_zero_bound) => limit,
        _ => {
            debug!(bound, "rejecting value against an invalid bound");
            return false;
        }
    };

    let current = value
        .filter(|value| !value.is_empty())
        .map(BigNumber::parse)
        .unwrap_or_default();
    let current = match decimals {
        Some(decimals) => current.shifted_by(i64::from(decimals)),
        None => current,
    };

    current.compare(limit).is_some_and(accept)
}
