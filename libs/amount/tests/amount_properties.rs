//! Amount Arithmetic Properties
//!
//! Behaviour that must hold for every amount the swap, pool and builder flows
//! push through this library, regardless of token precision.

use dex_amount::{
    amount, amount_or_zero, format_amount, from_base_units, get_changes_direction, get_price,
    is_good_bignumber, share_amount, to_base_units, truncate_decimals, validate_max_value,
    validate_min_value, BigFixed, ChangeDirection, DEFAULT_FORMAT_DECIMALS,
};
use proptest::prelude::*;

fn fixed(input: &str) -> BigFixed {
    input.parse().expect("finite amount")
}

/// `mantissa * 10^-scale` written out as a fixed-point string
fn fixed_point(mantissa: u128, scale: usize) -> String {
    let digits = format!("{mantissa:0>width$}", width = scale + 1);
    let (integer, fraction) = digits.split_at(digits.len() - scale);
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

fn fractional_digits(formatted: &str) -> usize {
    formatted.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

#[test]
fn test_unusable_amounts_are_not_formatted() {
    for input in ["0", "-5", "NaN", "Infinity"] {
        assert_eq!(format_amount(input, DEFAULT_FORMAT_DECIMALS), None, "{input}");
    }
}

#[test]
fn test_good_bignumber_modes() {
    assert!(is_good_bignumber(0, false));
    assert!(!is_good_bignumber(0, true));
    assert!(!is_good_bignumber(-1, true));
    assert!(!is_good_bignumber(-1, false));
}

#[test]
fn test_amount_rendering() {
    assert_eq!(amount(Some("0"), 9), "0");
    assert_eq!(amount(Some("1000000000"), 9), "1");
    assert_eq!(amount(Some("1234567000000000"), 9), "1,234,567");
    assert_eq!(amount_or_zero(Some("Infinity"), 9), "0");
}

#[test]
fn test_share_amount() {
    assert_eq!(share_amount("100", "50", "0", 9), "0");
    assert_eq!(share_amount("10", "100", "50", 0), "20");
}

#[test]
fn test_uint128_scale_balances() {
    // 1000 LP of a 2000 LP pool holding 1e9 tokens at 9 dp
    assert_eq!(
        share_amount("1000000000000", "1000000000000000000", "2000000000000", 9),
        "500000000"
    );
    assert_eq!(amount(Some("100000000000000000000000000000"), 18), "100,000,000,000");
    assert_eq!(
        get_price("1000000000000000000", "100000000000000000000000000000", 18, 18),
        "100000000000000000000000000000"
    );
    assert!(validate_max_value(
        Some("340282366920938463463374607431768211455"),
        Some("340282366920938463463.374607431768211455"),
        Some(18)
    ));
}

#[test]
fn test_long_fractions_are_never_rounded_up() {
    let nines = format!("0.{}", "9".repeat(29));
    assert_eq!(format_amount(&nines, 28), Some(format!("0.{}", "9".repeat(28))));
}

#[test]
fn test_price() {
    assert_eq!(get_price("0", "100", 9, 9), "0");
    assert_eq!(get_price("1000000000", "2000000000", 9, 9), "2000000000");
}

#[test]
fn test_bounds() {
    assert!(!validate_max_value(Some("100"), Some("150"), None));
    assert!(validate_max_value(None, Some("anything"), None));
    assert!(validate_min_value(Some("0"), Some("0"), None));
}

#[test]
fn test_truncation_never_rounds_up() {
    assert_eq!(truncate_decimals(Some("1.23456"), Some(2)).as_deref(), Some("1.23"));
    assert_eq!(truncate_decimals(Some("9.999"), Some(0)).as_deref(), Some("9"));
}

#[test]
fn test_changes_direction() {
    assert_eq!(get_changes_direction(Some("-3")).as_i8(), -1);
    assert_eq!(get_changes_direction(None), ChangeDirection::Flat);
    assert_eq!(get_changes_direction(Some("0.0001")).as_i8(), 1);
}

#[test]
fn test_base_unit_conversion_matches_display() {
    let raw = "1500000000000000000";
    assert_eq!(from_base_units(raw, 18).unwrap(), fixed("1.5"));
    assert_eq!(to_base_units("1.5", 18).unwrap().to_string(), raw);
    assert_eq!(amount(Some(raw), 18), "1.5");
}

proptest! {
    #[test]
    fn prop_format_amount_respects_precision(
        mantissa in 1u128..=u128::MAX,
        scale in 0usize..=40,
        decimals in 0u32..=24,
    ) {
        let value = fixed_point(mantissa, scale);
        let formatted = format_amount(&value, decimals).expect("positive finite amount");
        prop_assert!(fractional_digits(&formatted) <= decimals as usize);
    }

    #[test]
    fn prop_truncation_never_exceeds_input(
        mantissa in 1u128..=u128::MAX,
        scale in 0usize..=40,
        decimals in 0u32..=24,
    ) {
        let value = fixed_point(mantissa, scale);
        let truncated = truncate_decimals(Some(value.as_str()), Some(decimals))
            .expect("value present");
        prop_assert!(fixed(&truncated) <= fixed(&value));
    }

    #[test]
    fn prop_amount_round_trips_base_units(raw in any::<u128>(), decimals in 0u32..=24) {
        let human = amount(Some(raw.to_string().as_str()), decimals).replace(',', "");
        let back = to_base_units(&human, decimals).expect("finite human amount");
        prop_assert_eq!(back, BigFixed::from(raw));
    }

    #[test]
    fn prop_share_of_whole_pool_is_pool_balance(
        pool_token in any::<u128>(),
        pool_lp in 1u128..=u128::MAX,
        decimals in 0u32..=24,
    ) {
        let share = share_amount(&pool_lp.to_string(), &pool_token.to_string(), &pool_lp.to_string(), decimals);
        let expected = from_base_units(&pool_token.to_string(), decimals).expect("finite balance");
        prop_assert_eq!(fixed(&share), expected);
    }
}
