//! Fixed-point conversion between base units and human amounts
//!
//! A token's raw on-chain amount is an integer count of base units; the human
//! amount is that integer divided by `10^decimals`. Shifting moves the decimal
//! point only, so conversions are exact for any on-chain integer width.

use crate::error::{AmountError, Result};
use crate::fixed::{BigFixed, Rounding};

/// Multiply `value` by `10^places` (negative `places` divides)
///
/// Fails with [`AmountError::Overflow`] when the result leaves the
/// [`BigFixed`] range.
pub fn shifted_by(value: &BigFixed, places: i64) -> Result<BigFixed> {
    value.shifted_by(places).ok_or(AmountError::Overflow)
}

/// Convert a human amount into an integer count of base units
///
/// Fractional base units are truncated toward zero: a user can never submit
/// more than they typed.
pub fn to_base_units(human: &str, decimals: u32) -> Result<BigFixed> {
    let value: BigFixed = human.parse()?;
    let scaled = shifted_by(&value, i64::from(decimals))?;
    Ok(scaled.round_dp(0, Rounding::Down).normalized())
}

/// Same as [`to_base_units`], but input finer than one base unit is an error
pub fn to_base_units_exact(human: &str, decimals: u32) -> Result<BigFixed> {
    let value: BigFixed = human.parse()?;
    if value.decimal_places() > decimals {
        return Err(AmountError::PrecisionExceeded { decimals });
    }
    to_base_units(human, decimals)
}

/// Convert an integer count of base units into a human amount
pub fn from_base_units(raw: &str, decimals: u32) -> Result<BigFixed> {
    let value: BigFixed = raw.parse()?;
    Ok(shifted_by(&value, -i64::from(decimals))?.normalized())
}
