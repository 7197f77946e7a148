//! # DEX Amount Library - Decimal-Safe Amount Arithmetic
//!
//! ## Purpose
//!
//! Formatting, truncation, range validation and price/share computation for
//! token amounts in the swap, pool, farming and token-builder flows. Every
//! amount is an exact arbitrary-precision decimal ([`BigFixed`]), wide enough
//! for uint128/uint256 balances; floating point never enters a value that can
//! reach a transaction.
//!
//! ## Integration Points
//!
//! - **Input Sources**: amount input fields, pool/farming API payloads, wallet balances
//! - **Output Destinations**: display components, swap/pool stores before submitting
//! - **Precision**: native token precision (`decimals`), e.g. 9 for native tokens, 18 for WETH
//! - **Rounding**: hard-wired per operation, [`Rounding::Down`] everywhere except quoted prices
//!
//! ## Failure Model
//!
//! Public functions never panic or return errors for bad numeric input. Each
//! has a fixed fallback:
//!
//! | Category | Functions | Fallback |
//! |----------|-----------|----------|
//! | Reject | [`format_amount`] | `None` |
//! | Fail closed | [`validate_min_value`], [`validate_max_value`] | `false` |
//! | Fail to neutral | [`get_price`], [`share_amount`], [`pool_share_percent`] | `"0"` |
//! | Pass through | [`truncate_decimals`] | input unchanged |
//!
//! The checked layer ([`units`], [`AmountField`]) returns [`AmountError`] /
//! [`FieldError`] instead, for callers that need the reason.
//!
//! ## Example Usage
//!
//! ```rust
//! use dex_amount::{amount, format_amount, get_price, truncate_decimals};
//!
//! assert_eq!(amount(Some("1234567000000000"), 9), "1,234,567");
//! assert_eq!(format_amount("1.23456", 2).as_deref(), Some("1.23"));
//! assert_eq!(truncate_decimals(Some("1.23456"), Some(2)).as_deref(), Some("1.23"));
//! assert_eq!(get_price("1000000000", "2000000000", 9, 9), "2000000000");
//! ```

pub mod direction;
pub mod error;
pub mod field;
pub mod fixed;
pub mod format;
pub mod number;
pub mod pool_math;
pub mod units;
pub mod validate;

pub use direction::{get_changes_direction, ChangeDirection};
pub use error::AmountError;
pub use field::{AmountField, FieldError};
pub use fixed::{BigFixed, Rounding};
pub use format::{
    amount, amount_or_zero, format_amount, truncate_decimals, DEFAULT_FORMAT_DECIMALS,
    DEFAULT_TOKEN_DECIMALS,
};
pub use number::{is_good_bignumber, BigNumber};
pub use pool_math::{get_price, pool_share_percent, share_amount};
pub use units::{from_base_units, to_base_units, to_base_units_exact};
pub use validate::{validate_max_value, validate_min_value};

/// Interop with fixed-width decimal code
pub use rust_decimal::Decimal;
