//! Loose-parsed amount values
//!
//! Amounts arrive as strings from input fields, API payloads and wallet
//! responses. [`BigNumber`] parses them the forgiving way a big-number library
//! does: anything that is not a well-formed number becomes `NaN` rather than an
//! error, and magnitudes past the [`BigFixed`] range become `±Infinity`.
//! Arithmetic follows the same rules, so a bad input propagates to the end of a
//! computation and is caught by a single [`is_good_bignumber`] check there.

use crate::error::AmountError;
use crate::fixed::{BigFixed, Rounding};
use regex::Regex;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Sign, digits with optional fraction, optional exponent
static NUMBER_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?$")
        .expect("number grammar is a valid regex")
});

/// A decimal amount that may also be NaN or infinite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumber {
    Finite(BigFixed),
    NaN,
    Infinity,
    NegInfinity,
}

impl BigNumber {
    pub fn zero() -> Self {
        Self::Finite(BigFixed::zero())
    }

    /// Parse without failing: malformed input is `NaN`
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "NaN" => return Self::NaN,
            "Infinity" | "+Infinity" => return Self::Infinity,
            "-Infinity" => return Self::NegInfinity,
            _ => {}
        }

        let Some(caps) = NUMBER_GRAMMAR.captures(input) else {
            return Self::NaN;
        };
        let int_part = caps.get(2).map_or("", |m| m.as_str());
        let frac_part = caps.get(3).map_or("", |m| m.as_str());
        // A lone "." or sign carries no digits
        if int_part.is_empty() && frac_part.is_empty() {
            return Self::NaN;
        }

        let negative = caps.get(1).is_some_and(|sign| sign.as_str() == "-");
        let overflow = Self::infinity_with_sign(negative);
        let Some(value) = BigFixed::from_digits(int_part, frac_part, negative) else {
            return overflow;
        };

        match caps.get(4) {
            None => Self::Finite(value),
            Some(exponent) => match exponent.as_str().parse::<i64>() {
                Ok(exp) => Self::Finite(value).shifted_by(exp),
                // Exponent beyond i64: only the direction matters
                Err(_) if value.is_zero() => Self::Finite(value),
                Err(_) if exponent.as_str().starts_with('-') => Self::zero(),
                Err(_) => overflow,
            },
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::NaN)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(value) if value.is_zero())
    }

    /// Finite value, if any
    pub fn finite(&self) -> Option<&BigFixed> {
        match self {
            Self::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// `-1`, `0` or `1` for ordered values, `None` for NaN
    pub fn signum(&self) -> Option<i8> {
        match self {
            Self::Finite(value) => Some(value.signum()),
            Self::Infinity => Some(1),
            Self::NegInfinity => Some(-1),
            Self::NaN => None,
        }
    }

    /// Number of significant fractional digits (trailing zeros excluded)
    pub fn decimal_places(&self) -> Option<u32> {
        self.finite().map(BigFixed::decimal_places)
    }

    /// Compare against a finite value; `None` when self is NaN
    pub fn compare(&self, other: &BigFixed) -> Option<Ordering> {
        match self {
            Self::Finite(value) => Some(value.cmp(other)),
            Self::Infinity => Some(Ordering::Greater),
            Self::NegInfinity => Some(Ordering::Less),
            Self::NaN => None,
        }
    }

    /// Multiply by `10^places`; overflow becomes infinity of the same sign
    pub fn shifted_by(self, places: i64) -> Self {
        match self {
            Self::Finite(value) => match value.shifted_by(places) {
                Some(shifted) => Self::Finite(shifted),
                None => Self::infinity_with_sign(value.is_negative()),
            },
            other => other,
        }
    }

    pub fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::NaN, _) | (_, Self::NaN) => Self::NaN,
            (Self::Finite(a), Self::Finite(b)) => match a.checked_mul(&b) {
                Some(product) => Self::Finite(product),
                None => Self::infinity_with_sign(a.is_negative() != b.is_negative()),
            },
            (lhs, rhs) => {
                if lhs.is_zero() || rhs.is_zero() {
                    return Self::NaN;
                }
                let negative = lhs.signum() != rhs.signum();
                Self::infinity_with_sign(negative)
            }
        }
    }

    /// Divide, rounding the quotient to `dp` fractional digits
    ///
    /// `x / 0` is infinite with the sign of `x`, `0 / 0` and `∞ / ∞` are NaN,
    /// and a finite value over an infinite one is zero.
    pub fn div_round(self, rhs: Self, dp: u32, rounding: Rounding) -> Self {
        match (self, rhs) {
            (Self::NaN, _) | (_, Self::NaN) => Self::NaN,
            (Self::Finite(a), Self::Finite(b)) => {
                if b.is_zero() {
                    if a.is_zero() {
                        return Self::NaN;
                    }
                    return Self::infinity_with_sign(a.is_negative());
                }
                match a.div_round(&b, dp, rounding) {
                    Some(quotient) => Self::Finite(quotient),
                    None => Self::infinity_with_sign(a.is_negative() != b.is_negative()),
                }
            }
            (Self::Finite(_), _) => Self::zero(),
            (lhs, Self::Finite(b)) => {
                let negative = (lhs.signum() == Some(-1)) != b.is_negative();
                Self::infinity_with_sign(negative)
            }
            _ => Self::NaN,
        }
    }

    /// Round to `dp` fractional digits
    pub fn round_dp(self, dp: u32, rounding: Rounding) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(value.round_dp(dp, rounding)),
            other => other,
        }
    }

    /// Finite value as a `rust_decimal::Decimal`
    pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
        match self {
            Self::Finite(value) => value.to_decimal(),
            _ => Err(AmountError::NotFinite),
        }
    }

    fn infinity_with_sign(negative: bool) -> Self {
        if negative {
            Self::NegInfinity
        } else {
            Self::Infinity
        }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

/// Canonical fixed-point rendering: no exponent, no trailing fractional zeros
impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => fmt::Display::fmt(value, f),
            Self::NaN => f.write_str("NaN"),
            Self::Infinity => f.write_str("Infinity"),
            Self::NegInfinity => f.write_str("-Infinity"),
        }
    }
}

impl FromStr for BigNumber {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for BigNumber {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<&String> for BigNumber {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<String> for BigNumber {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&BigNumber> for BigNumber {
    fn from(value: &BigNumber) -> Self {
        value.clone()
    }
}

impl From<BigFixed> for BigNumber {
    fn from(value: BigFixed) -> Self {
        Self::Finite(value)
    }
}

impl From<Decimal> for BigNumber {
    fn from(value: Decimal) -> Self {
        Self::Finite(BigFixed::from(value))
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::Finite(BigFixed::from(i64::from(value)))
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::Finite(BigFixed::from(value))
    }
}

impl From<u128> for BigNumber {
    fn from(value: u128) -> Self {
        Self::Finite(BigFixed::from(value))
    }
}

/// Validity gate for any amount used downstream
///
/// True iff the value is finite and non-negative, and additionally non-zero
/// when `non_zero_check` is set.
pub fn is_good_bignumber(value: impl Into<BigNumber>, non_zero_check: bool) -> bool {
    match value.into() {
        BigNumber::Finite(value) => {
            !value.is_negative() && !(non_zero_check && value.is_zero())
        }
        _ => false,
    }
}
