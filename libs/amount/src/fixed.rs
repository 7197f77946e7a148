//! Arbitrary-precision fixed-point decimal
//!
//! [`BigFixed`] stores `mantissa * 10^-scale` with a [`BigInt`] mantissa, so
//! on-chain balances of any width (uint128, uint256) are held exactly. Scale
//! changes and rounding are integer operations with an explicit [`Rounding`]
//! mode; no intermediate ever passes through a fixed-width type.
//!
//! Range is bounded by [`MAX_EXPONENT`]: magnitudes at or above
//! `10^MAX_EXPONENT` are out of range (callers map that to infinity), and
//! digits below `10^-MAX_EXPONENT` are dropped toward zero.

use crate::error::AmountError;
use crate::number::BigNumber;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Decimal exponent bound in both directions
pub const MAX_EXPONENT: u32 = 1_000;

/// Largest scale `rust_decimal` can represent
const DECIMAL_MAX_SCALE: u32 = 28;

/// Rounding applied when fractional digits are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward zero
    Down,
    /// Away from zero
    Up,
}

/// Exact decimal: `mantissa * 10^-scale`
#[derive(Debug, Clone)]
pub struct BigFixed {
    mantissa: BigInt,
    scale: u32,
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

impl BigFixed {
    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            scale: 0,
        }
    }

    /// Build from validated digit runs (`int_part` and `frac_part` are ASCII digits)
    ///
    /// Fractional digits past [`MAX_EXPONENT`] are cut off, never rounded.
    pub(crate) fn from_digits(int_part: &str, frac_part: &str, negative: bool) -> Option<Self> {
        let frac_part = &frac_part[..frac_part.len().min(MAX_EXPONENT as usize)];
        let digits = format!("{int_part}{frac_part}");
        let digits = if digits.is_empty() { "0" } else { digits.as_str() };

        let magnitude: BigInt = digits.parse().ok()?;
        let mantissa = if negative { -magnitude } else { magnitude };
        Self {
            mantissa,
            scale: frac_part.len() as u32,
        }
        .in_range()
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// `-1`, `0` or `1`
    pub fn signum(&self) -> i8 {
        match self.mantissa.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Significant fractional digits (trailing zeros excluded)
    pub fn decimal_places(&self) -> u32 {
        self.normalized().scale
    }

    /// Same value with trailing fractional zeros stripped
    pub fn normalized(&self) -> Self {
        if self.mantissa.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u32);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;
        while scale > 0 && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    /// Multiply by `10^places`; `None` when the result leaves the range
    pub fn shifted_by(&self, places: i64) -> Option<Self> {
        if self.is_zero() || places == 0 {
            return Some(self.clone());
        }

        let target = i64::from(self.scale).saturating_sub(places);
        if target >= 0 {
            let target = u32::try_from(target).unwrap_or(u32::MAX);
            return Some(Self::from_parts_truncated(self.mantissa.clone(), target));
        }

        // Integer growth past the range overflows whatever the mantissa is
        let grow = u32::try_from(target.unsigned_abs())
            .ok()
            .filter(|grow| *grow <= MAX_EXPONENT)?;
        Self {
            mantissa: &self.mantissa * pow10(grow),
            scale: 0,
        }
        .in_range()
    }

    /// Exact product; digits below the scale bound are dropped toward zero
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Self::from_parts_truncated(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
            .in_range()
    }

    /// Quotient rounded to `dp` fractional digits; `None` for a zero divisor
    /// or an out-of-range result
    ///
    /// `dp` is capped at [`MAX_EXPONENT`].
    pub fn div_round(&self, rhs: &Self, dp: u32, rounding: Rounding) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let dp = dp.min(MAX_EXPONENT);

        // (a / 10^sa) / (b / 10^sb) * 10^dp = a * 10^(sb + dp) / (b * 10^sa)
        let numerator = &self.mantissa * pow10(rhs.scale + dp);
        let denominator = &rhs.mantissa * pow10(self.scale);
        let quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;

        let mantissa = if rounding == Rounding::Up && !remainder.is_zero() {
            if numerator.is_negative() != denominator.is_negative() {
                quotient - 1
            } else {
                quotient + 1
            }
        } else {
            quotient
        };
        Self {
            mantissa,
            scale: dp,
        }
        .in_range()
    }

    /// Round to at most `dp` fractional digits
    pub fn round_dp(&self, dp: u32, rounding: Rounding) -> Self {
        if self.scale <= dp {
            return self.clone();
        }
        let divisor = pow10(self.scale - dp);
        let quotient = &self.mantissa / &divisor;
        let remainder = &self.mantissa % &divisor;

        let mantissa = match rounding {
            Rounding::Up if !remainder.is_zero() => quotient + i32::from(self.signum()),
            _ => quotient,
        };
        Self { mantissa, scale: dp }
    }

    /// Convert to `rust_decimal`, truncating past 28 fractional digits
    pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
        let fitted = self
            .normalized()
            .round_dp(DECIMAL_MAX_SCALE, Rounding::Down);
        let mantissa = fitted.mantissa.to_i128().ok_or(AmountError::Overflow)?;
        Decimal::try_from_i128_with_scale(mantissa, fitted.scale).map_err(|_| AmountError::Overflow)
    }

    /// `mantissa * 10^-scale`, dropping digits past [`MAX_EXPONENT`]
    /// fractional places toward zero
    fn from_parts_truncated(mantissa: BigInt, scale: u32) -> Self {
        if scale <= MAX_EXPONENT {
            return Self { mantissa, scale };
        }
        // 10^drop > 2^drop > |mantissa| once drop exceeds the bit length
        let drop = scale - MAX_EXPONENT;
        let mantissa = if u64::from(drop) > mantissa.bits() {
            BigInt::zero()
        } else {
            mantissa / pow10(drop)
        };
        Self {
            mantissa,
            scale: MAX_EXPONENT,
        }
    }

    fn in_range(self) -> Option<Self> {
        // 2^(3k) < 10^k, so fewer bits than that is always in range
        let digits = MAX_EXPONENT + self.scale;
        if self.mantissa.bits() <= 3 * u64::from(digits) {
            return Some(self);
        }
        let fits = self.mantissa.magnitude() < pow10(digits).magnitude();
        fits.then_some(self)
    }
}

impl Default for BigFixed {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigFixed {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigFixed {}

impl PartialOrd for BigFixed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFixed {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.mantissa.cmp(&other.mantissa),
            Ordering::Less => {
                let aligned = &self.mantissa * pow10(other.scale - self.scale);
                aligned.cmp(&other.mantissa)
            }
            Ordering::Greater => {
                let aligned = &other.mantissa * pow10(self.scale - other.scale);
                self.mantissa.cmp(&aligned)
            }
        }
    }
}

/// Plain fixed-point notation without trailing fractional zeros
impl fmt::Display for BigFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.normalized();
        let digits = normalized.mantissa.magnitude().to_string();
        let scale = normalized.scale as usize;

        if normalized.is_negative() {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{integer}.{fraction}")
    }
}

impl FromStr for BigFixed {
    type Err = AmountError;

    /// Strict parse: the value must be a finite number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match BigNumber::parse(s) {
            BigNumber::Finite(value) => Ok(value),
            BigNumber::NaN => Err(AmountError::InvalidNumber {
                input: s.to_string(),
            }),
            BigNumber::Infinity | BigNumber::NegInfinity => Err(AmountError::NotFinite),
        }
    }
}

impl From<BigInt> for BigFixed {
    fn from(mantissa: BigInt) -> Self {
        Self { mantissa, scale: 0 }
    }
}

impl From<i64> for BigFixed {
    fn from(value: i64) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<u64> for BigFixed {
    fn from(value: u64) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<u128> for BigFixed {
    fn from(value: u128) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<Decimal> for BigFixed {
    fn from(value: Decimal) -> Self {
        Self {
            mantissa: BigInt::from(value.mantissa()),
            scale: value.scale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(input: &str) -> BigFixed {
        input.parse().unwrap()
    }

    #[test]
    fn test_holds_uint128_and_beyond() {
        let max = BigFixed::from(u128::MAX);
        assert_eq!(max.to_string(), "340282366920938463463374607431768211455");
        let product = max.checked_mul(&max).unwrap();
        assert_eq!(
            product.to_string(),
            "115792089237316195423570985008687907852589419931798687112530834793049593217025"
        );
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(fixed("1.500"), fixed("1.5"));
        assert!(fixed("0.1") < fixed("0.10001"));
        assert!(fixed("-2") < fixed("-1.99"));
        assert_eq!(fixed("1.2300").decimal_places(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(fixed("0.05").to_string(), "0.05");
        assert_eq!(fixed("-0.5").to_string(), "-0.5");
        assert_eq!(fixed("1200").to_string(), "1200");
        assert_eq!(fixed("-0").to_string(), "0");
    }

    #[test]
    fn test_shift() {
        assert_eq!(fixed("1.5").shifted_by(18).unwrap().to_string(), "1500000000000000000");
        assert_eq!(fixed("1500000000").shifted_by(-9).unwrap(), fixed("1.5"));
        assert!(fixed("1").shifted_by(i64::from(MAX_EXPONENT)).is_none());
        assert!(fixed("1").shifted_by(i64::MAX).is_none());
        assert_eq!(fixed("1").shifted_by(i64::MIN).unwrap(), BigFixed::zero());
    }

    #[test]
    fn test_div_round_modes() {
        let one = fixed("1");
        let three = fixed("3");
        assert_eq!(one.div_round(&three, 2, Rounding::Down).unwrap(), fixed("0.33"));
        assert_eq!(one.div_round(&three, 2, Rounding::Up).unwrap(), fixed("0.34"));
        assert_eq!(fixed("-1").div_round(&three, 2, Rounding::Up).unwrap(), fixed("-0.34"));
        assert_eq!(fixed("0.3").div_round(&three, 2, Rounding::Up).unwrap(), fixed("0.1"));
        assert!(one.div_round(&BigFixed::zero(), 2, Rounding::Down).is_none());
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(fixed("1.999").round_dp(2, Rounding::Down), fixed("1.99"));
        assert_eq!(fixed("1.991").round_dp(2, Rounding::Up), fixed("2.00"));
        assert_eq!(fixed("-1.991").round_dp(0, Rounding::Down), fixed("-1"));
        assert_eq!(fixed("1.5").round_dp(4, Rounding::Up), fixed("1.5"));
    }

    #[test]
    fn test_decimal_interop() {
        let decimal = Decimal::new(15, 1);
        assert_eq!(BigFixed::from(decimal), fixed("1.5"));
        assert_eq!(fixed("1.5").to_decimal(), Ok(decimal));
        assert_eq!(BigFixed::from(u128::MAX).to_decimal(), Err(AmountError::Overflow));
    }
}
