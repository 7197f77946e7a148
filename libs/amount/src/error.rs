//! Error types for checked amount arithmetic
//!
//! The public formatting and validation functions never surface these: they
//! collapse failures into their documented fallback values. The checked layer
//! (`units`, `AmountField`) returns them so callers that submit transactions
//! can tell *why* an amount was rejected.

use thiserror::Error;

/// Errors produced by checked amount arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Input is not a number the amount grammar accepts
    #[error("Invalid decimal string: '{input}' - expected numeric format")]
    InvalidNumber { input: String },

    /// Value is NaN or infinite
    #[error("Value is not finite")]
    NotFinite,

    /// Result is outside the representable range
    #[error("Overflow: result exceeds maximum representable decimal")]
    Overflow,

    /// Value carries more fractional digits than the token precision allows
    #[error("Precision exceeded: more than {decimals} fractional digits")]
    PrecisionExceeded { decimals: u32 },
}

pub type Result<T> = std::result::Result<T, AmountError>;
