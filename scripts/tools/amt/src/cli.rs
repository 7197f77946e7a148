use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use dex_config::AmountConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "amt")]
#[command(about = "Amount Tool - decimal-safe token amount arithmetic")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Config file (defaults to config/amount.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a positive amount, truncated to token precision
    Format {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[command(flatten)]
        precision: Precision,
    },
    /// Truncate field input to token precision (non-positive input passes through)
    Truncate {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[command(flatten)]
        precision: Precision,
    },
    /// Check a value against base-unit bounds
    Validate {
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
        /// Lower bound in base units
        #[arg(long, allow_hyphen_values = true)]
        min: Option<String>,
        /// Upper bound in base units
        #[arg(long, allow_hyphen_values = true)]
        max: Option<String>,
        #[command(flatten)]
        precision: Precision,
    },
    /// Render a base-unit amount with thousands separators
    Amount {
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
        #[command(flatten)]
        precision: Precision,
        /// Print 0 instead of an empty result
        #[arg(long)]
        or_zero: bool,
    },
    /// Token amount claimable by a liquidity-pool holder
    Share {
        wallet_lp: String,
        pool_token: String,
        pool_lp: String,
        #[command(flatten)]
        precision: Precision,
    },
    /// Exchange rate between two base-unit amounts
    Price {
        from_amount: String,
        to_amount: String,
        #[arg(long)]
        from_decimals: Option<u32>,
        #[arg(long, conflicts_with = "from_decimals")]
        from_token: Option<String>,
        #[arg(long)]
        to_decimals: Option<u32>,
        #[arg(long, conflicts_with = "to_decimals")]
        to_token: Option<String>,
    },
    /// Direction of a rate change
    Direction {
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Convert a human amount into base units
    ToBase {
        value: String,
        #[command(flatten)]
        precision: Precision,
    },
    /// Convert base units into a human amount
    FromBase {
        value: String,
        #[command(flatten)]
        precision: Precision,
    },
    /// Holder's share of a pool in percent
    Percent { wallet_lp: String, pool_lp: String },
    /// Run a token's amount-field submit gate
    Check {
        value: String,
        /// Token symbol (configured or built-in)
        #[arg(short, long)]
        token: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct Precision {
    /// Token precision (decimal places)
    #[arg(short, long)]
    pub decimals: Option<u32>,
    /// Take the precision from a token symbol
    #[arg(short, long, conflicts_with = "decimals")]
    pub token: Option<String>,
}

impl Precision {
    /// Explicit decimals, then the token's precision, then `fallback`
    pub fn resolve(&self, config: &AmountConfig, fallback: Option<u32>) -> Result<Option<u32>> {
        resolve_decimals(self.decimals, self.token.as_deref(), config, fallback)
    }
}

pub fn resolve_decimals(
    decimals: Option<u32>,
    token: Option<&str>,
    config: &AmountConfig,
    fallback: Option<u32>,
) -> Result<Option<u32>> {
    match (decimals, token) {
        (Some(decimals), _) => Ok(Some(decimals)),
        (None, Some(symbol)) => config
            .token_decimals(symbol)
            .map(Some)
            .ok_or_else(|| anyhow!("Unknown token {}", symbol)),
        (None, None) => Ok(fallback),
    }
}
