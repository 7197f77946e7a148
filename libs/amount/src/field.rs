//! Amount input field validation
//!
//! Bundles a token's precision with its configured bounds so an input field
//! can truncate on blur and gate its submit action with one call.

use crate::error::AmountError;
use crate::fixed::BigFixed;
use crate::format::truncate_decimals;
use crate::number::is_good_bignumber;
use crate::units::to_base_units_exact;
use crate::validate::{validate_max_value, validate_min_value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an amount field refuses to submit
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Amount '{input}' is not a positive number")]
    Invalid { input: String },

    #[error("Amount is below the minimum of {min} base units")]
    BelowMin { min: String },

    #[error("Amount is above the maximum of {max} base units")]
    AboveMax { max: String },

    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Precision and bounds of an amount input
///
/// Bounds are base-unit strings, as delivered by pool and farming APIs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmountField {
    pub decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
}

impl AmountField {
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    pub fn with_min(mut self, min_value: impl Into<String>) -> Self {
        self.min_value = Some(min_value.into());
        self
    }

    pub fn with_max(mut self, max_value: impl Into<String>) -> Self {
        self.max_value = Some(max_value.into());
        self
    }

    /// Value to write back into the field when it loses focus
    pub fn on_blur(&self, input: &str) -> String {
        truncate_decimals(Some(input), Some(self.decimals)).unwrap_or_else(|| input.to_string())
    }

    /// Submit gate: returns the amount in base units when the input is usable
    pub fn check(&self, input: &str) -> Result<BigFixed, FieldError> {
        if !is_good_bignumber(input, true) {
            return Err(FieldError::Invalid {
                input: input.to_string(),
            });
        }
        let base_units = to_base_units_exact(input, self.decimals)?;

        let min = self.min_value.as_deref();
        if !validate_min_value(min, Some(input), Some(self.decimals)) {
            return Err(FieldError::BelowMin {
                min: min.unwrap_or_default().to_string(),
            });
        }
        let max = self.max_value.as_deref();
        if !validate_max_value(max, Some(input), Some(self.decimals)) {
            return Err(FieldError::AboveMax {
                max: max.unwrap_or_default().to_string(),
            });
        }

        Ok(base_units)
    }

    pub fn is_submittable(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }
}
