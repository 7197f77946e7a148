//! # DEX Amount Configuration
//!
//! Centralized configuration for amount handling: display precision
//! defaults, per-token precision and input bounds, and the log filter used
//! by tools.
//!
//! ## Features
//!
//! - **Token Registry**: built-in precisions of well-known tokens
//! - **Layered Loading**: defaults, TOML file, `DEX__*` environment overrides
//! - **Field Descriptions**: per-token [`AmountField`](dex_amount::AmountField) construction
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dex_config::{load_config, tokens};
//!
//! let config = load_config().expect("valid configuration");
//! let usdc = config.token_decimals("USDC").unwrap_or(tokens::decimals::USDC);
//! assert_eq!(usdc, 6);
//! ```

pub mod amount_config;
pub mod tokens;

// Re-export commonly used types
pub use amount_config::{load_config, AmountConfig, DisplayConfig, TokenSettings};
