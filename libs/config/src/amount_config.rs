//! Amount Configuration Module
//!
//! Loads display defaults and per-token precision/bounds. Sources, lowest
//! precedence first: built-in defaults, a TOML file, `DEX__*` environment
//! variables (e.g. `DEX__DISPLAY__TOKEN_DECIMALS=6`).

use crate::tokens;
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use dex_amount::{is_good_bignumber, AmountField, DEFAULT_FORMAT_DECIMALS, DEFAULT_TOKEN_DECIMALS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/amount.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "DEX";

/// Main amount configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AmountConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Display defaults
    pub display: DisplayConfig,

    /// Per-token settings, keyed by symbol
    pub tokens: BTreeMap<String, TokenSettings>,
}

/// Precision defaults for display helpers
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub format_decimals: u32,
    pub token_decimals: u32,
}

/// Individual token settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TokenSettings {
    pub decimals: u32,

    // Input bounds in base units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display: DisplayConfig::default(),
            tokens: BTreeMap::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format_decimals: DEFAULT_FORMAT_DECIMALS,
            token_decimals: DEFAULT_TOKEN_DECIMALS,
        }
    }
}

impl AmountConfig {
    /// Load configuration from an optional file with environment overrides
    ///
    /// An explicit `path` must exist; the default path is read only if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                let path = expand_path(path)?;
                info!("Loading amount config: {:?}", path);
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    info!("Loading amount config: {:?}", default);
                    builder = builder.add_source(File::from(default));
                } else {
                    debug!("No config file at {}, using defaults", DEFAULT_CONFIG_PATH);
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject token bounds the validators would fail closed on
    pub fn validate(&self) -> Result<()> {
        for (symbol, token) in &self.tokens {
            if let Some(min) = token.min_value.as_deref() {
                if !is_good_bignumber(min, false) {
                    bail!("Token {} has invalid min_value '{}'", symbol, min);
                }
            }
            if let Some(max) = token.max_value.as_deref() {
                if !is_good_bignumber(max, true) {
                    bail!("Token {} has invalid max_value '{}'", symbol, max);
                }
            }
        }
        Ok(())
    }

    /// Get settings for a configured token (case-insensitive)
    pub fn get_token(&self, symbol: &str) -> Option<&TokenSettings> {
        self.tokens
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(symbol))
            .map(|(_, settings)| settings)
    }

    /// Precision of a token: configured first, then the built-in registry
    pub fn token_decimals(&self, symbol: &str) -> Option<u32> {
        self.get_token(symbol)
            .map(|token| token.decimals)
            .or_else(|| tokens::known_decimals(symbol))
    }

    /// Input field description for a token
    pub fn amount_field(&self, symbol: &str) -> Option<AmountField> {
        match self.get_token(symbol) {
            Some(token) => Some(AmountField {
                decimals: token.decimals,
                min_value: token.min_value.clone(),
                max_value: token.max_value.clone(),
            }),
            None => tokens::known_decimals(symbol).map(AmountField::new),
        }
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand config path {}", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Convenience function to load configuration with defaults
pub fn load_config() -> Result<AmountConfig> {
    AmountConfig::load(None)
}
