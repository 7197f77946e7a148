//! Price and pool-share computations for swap and liquidity views
//!
//! Balances and shares round toward zero; quoted prices round away from zero.
//! Every quotient is computed exactly at its target precision, so balances of
//! any on-chain width stay exact.

use crate::fixed::Rounding;
use crate::number::{is_good_bignumber, BigNumber};
use tracing::debug;

/// Token amount claimable by a liquidity-pool holder
///
/// `wallet_lp * pool_token / pool_lp`, truncated to whole base units, then
/// shifted into a human amount by `token_decimals`. A pool LP balance of
/// exactly `"0"` short-circuits to `"0"`; other zero spellings reach the
/// division and render as `"NaN"` / `"Infinity"`.
pub fn share_amount(
    wallet_lp_balance: &str,
    pool_token_balance: &str,
    pool_lp_balance: &str,
    token_decimals: u32,
) -> String {
    if pool_lp_balance == "0" {
        return "0".to_string();
    }

    BigNumber::parse(wallet_lp_balance)
        .mul(BigNumber::parse(pool_token_balance))
        .div_round(BigNumber::parse(pool_lp_balance), 0, Rounding::Down)
        .shifted_by(-i64::from(token_decimals))
        .to_string()
}

/// Exchange rate between two base-unit amounts, in `to` base units
///
/// Computes `(to / 10^to_decimals) / (from / 10^from_decimals)`, rounds up to
/// `to_decimals` fractional digits and scales back by `10^to_decimals`. Any
/// result that is not a positive finite number is reported as `"0"`.
pub fn get_price(from_amount: &str, to_amount: &str, from_decimals: u32, to_decimals: u32) -> String {
    let to = BigNumber::parse(to_amount).shifted_by(-i64::from(to_decimals));
    let from = BigNumber::parse(from_amount).shifted_by(-i64::from(from_decimals));

    let price = to
        .div_round(from, to_decimals, Rounding::Up)
        .shifted_by(i64::from(to_decimals));

    if is_good_bignumber(&price, true) {
        price.to_string()
    } else {
        debug!(from_amount, to_amount, %price, "price is not a positive finite number");
        "0".to_string()
    }
}

/// Holder's share of a pool in percent, truncated to two fractional digits
pub fn pool_share_percent(wallet_lp_balance: &str, pool_lp_balance: &str) -> String {
    let share = BigNumber::parse(wallet_lp_balance)
        .mul(BigNumber::from(100))
        .div_round(BigNumber::parse(pool_lp_balance), 2, Rounding::Down);

    if is_good_bignumber(&share, false) {
        share.to_string()
    } else {
        "0".to_string()
    }
}
