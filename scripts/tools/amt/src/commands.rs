use crate::cli::{resolve_decimals, Commands};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use dex_amount::{
    amount, amount_or_zero, format_amount, from_base_units, get_changes_direction, get_price,
    pool_share_percent, share_amount, to_base_units, truncate_decimals, validate_max_value,
    validate_min_value, ChangeDirection,
};
use dex_config::AmountConfig;
use tracing::debug;

/// Result of a command, printable plain or colored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Value(String),
    Direction(ChangeDirection),
    Verdict { passed: bool, detail: String },
}

impl Report {
    pub fn passed(&self) -> bool {
        !matches!(self, Report::Verdict { passed: false, .. })
    }

    pub fn plain(&self) -> String {
        match self {
            Report::Value(value) => value.clone(),
            Report::Direction(direction) => {
                format!("{} ({})", direction.as_i8(), direction_label(*direction))
            }
            Report::Verdict { passed: true, detail } => format!("ok: {}", detail),
            Report::Verdict { passed: false, detail } => format!("rejected: {}", detail),
        }
    }

    pub fn colored(&self) -> String {
        let plain = self.plain();
        match self {
            Report::Value(_) => plain,
            Report::Direction(ChangeDirection::Up) => plain.green().to_string(),
            Report::Direction(ChangeDirection::Down) => plain.red().to_string(),
            Report::Direction(ChangeDirection::Flat) => plain.dimmed().to_string(),
            Report::Verdict { passed: true, .. } => format!("✅ {}", plain.green()),
            Report::Verdict { passed: false, .. } => format!("❌ {}", plain.red()),
        }
    }
}

fn direction_label(direction: ChangeDirection) -> &'static str {
    match direction {
        ChangeDirection::Up => "up",
        ChangeDirection::Down => "down",
        ChangeDirection::Flat => "flat",
    }
}

pub fn run(command: &Commands, config: &AmountConfig) -> Result<Report> {
    debug!(?command, "running command");
    let token_decimals = Some(config.display.token_decimals);

    let report = match command {
        Commands::Format { value, precision } => {
            let decimals = precision
                .resolve(config, Some(config.display.format_decimals))?
                .unwrap_or(config.display.format_decimals);
            match format_amount(value, decimals) {
                Some(formatted) => Report::Value(formatted),
                None => Report::Verdict {
                    passed: false,
                    detail: format!("'{}' is not a displayable amount", value),
                },
            }
        }

        Commands::Truncate { value, precision } => {
            let decimals = precision.resolve(config, None)?;
            Report::Value(truncate_decimals(Some(value.as_str()), decimals).unwrap_or_default())
        }

        Commands::Validate {
            value,
            min,
            max,
            precision,
        } => {
            let decimals = precision.resolve(config, None)?;
            let value = value.as_deref();
            let min_ok = validate_min_value(min.as_deref(), value, decimals);
            let max_ok = validate_max_value(max.as_deref(), value, decimals);
            let detail = match (min_ok, max_ok) {
                (true, true) => "within bounds".to_string(),
                (false, true) => format!("below min {}", min.as_deref().unwrap_or_default()),
                (true, false) => format!("above max {}", max.as_deref().unwrap_or_default()),
                (false, false) => "outside both bounds".to_string(),
            };
            Report::Verdict {
                passed: min_ok && max_ok,
                detail,
            }
        }

        Commands::Amount {
            value,
            precision,
            or_zero,
        } => {
            let decimals = precision
                .resolve(config, token_decimals)?
                .unwrap_or(config.display.token_decimals);
            let rendered = if *or_zero {
                amount_or_zero(value.as_deref(), decimals)
            } else {
                amount(value.as_deref(), decimals)
            };
            Report::Value(rendered)
        }

        Commands::Share {
            wallet_lp,
            pool_token,
            pool_lp,
            precision,
        } => {
            let decimals = precision
                .resolve(config, token_decimals)?
                .unwrap_or(config.display.token_decimals);
            Report::Value(share_amount(wallet_lp, pool_token, pool_lp, decimals))
        }

        Commands::Price {
            from_amount,
            to_amount,
            from_decimals,
            from_token,
            to_decimals,
            to_token,
        } => {
            let from = resolve_decimals(*from_decimals, from_token.as_deref(), config, token_decimals)?
                .unwrap_or(config.display.token_decimals);
            let to = resolve_decimals(*to_decimals, to_token.as_deref(), config, token_decimals)?
                .unwrap_or(config.display.token_decimals);
            Report::Value(get_price(from_amount, to_amount, from, to))
        }

        Commands::Direction { value } => Report::Direction(get_changes_direction(value.as_deref())),

        Commands::ToBase { value, precision } => {
            let decimals = precision
                .resolve(config, token_decimals)?
                .unwrap_or(config.display.token_decimals);
            let base = to_base_units(value, decimals)
                .with_context(|| format!("Cannot convert '{}' to base units", value))?;
            Report::Value(base.to_string())
        }

        Commands::FromBase { value, precision } => {
            let decimals = precision
                .resolve(config, token_decimals)?
                .unwrap_or(config.display.token_decimals);
            let human = from_base_units(value, decimals)
                .with_context(|| format!("Cannot convert '{}' from base units", value))?;
            Report::Value(human.to_string())
        }

        Commands::Percent { wallet_lp, pool_lp } => {
            Report::Value(pool_share_percent(wallet_lp, pool_lp))
        }

        Commands::Check { value, token } => {
            let field = config
                .amount_field(token)
                .ok_or_else(|| anyhow!("Unknown token {}", token))?;
            match field.check(value) {
                Ok(base) => Report::Verdict {
                    passed: true,
                    detail: format!("{} base units", base),
                },
                Err(err) => Report::Verdict {
                    passed: false,
                    detail: err.to_string(),
                },
            }
        }

        Commands::Config => Report::Value(config.to_toml()?),
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use dex_config::TokenSettings;
    use pretty_assertions::assert_eq;

    fn run_args(args: &[&str], config: &AmountConfig) -> Result<Report> {
        let cli = Cli::try_parse_from(std::iter::once("amt").chain(args.iter().copied()))?;
        run(&cli.command, config)
    }

    fn output(args: &[&str]) -> String {
        run_args(args, &AmountConfig::default()).unwrap().plain()
    }

    #[test]
    fn test_amount_uses_display_default() {
        assert_eq!(output(&["amount", "1234567000000000"]), "1,234,567");
        assert_eq!(output(&["amount", "1234567", "-d", "3"]), "1,234.567");
        assert_eq!(output(&["amount", "1500000", "--token", "USDC"]), "1.5");
        assert_eq!(output(&["amount", "NaN", "--or-zero"]), "0");
    }

    #[test]
    fn test_format_and_truncate() {
        assert_eq!(output(&["format", "1.23456", "-d", "2"]), "1.23");
        assert_eq!(output(&["format", "-5"]), "rejected: '-5' is not a displayable amount");
        assert_eq!(output(&["truncate", "1.23456", "-d", "2"]), "1.23");
        assert_eq!(output(&["truncate", "-1.23456", "-d", "2"]), "-1.23456");
    }

    #[test]
    fn test_validate() {
        let report = run_args(&["validate", "150", "--max", "100"], &AmountConfig::default()).unwrap();
        assert!(!report.passed());
        assert_eq!(report.plain(), "rejected: above max 100");
        assert_eq!(output(&["validate", "anything"]), "ok: within bounds");
        assert_eq!(output(&["validate", "1", "--min", "1000", "-d", "3"]), "ok: within bounds");
    }

    #[test]
    fn test_pool_math() {
        assert_eq!(output(&["share", "10", "100", "50", "-d", "0"]), "20");
        assert_eq!(output(&["share", "100", "50", "0"]), "0");
        assert_eq!(output(&["price", "1000000000", "2000000000"]), "2000000000");
        assert_eq!(
            output(&["price", "1000000", "500000000000000", "--from-token", "USDC", "--to-token", "WETH"]),
            "500000000000000"
        );
        assert_eq!(output(&["percent", "1", "3"]), "33.33");
    }

    #[test]
    fn test_direction() {
        assert_eq!(output(&["direction", "-0.5"]), "-1 (down)");
        assert_eq!(output(&["direction"]), "0 (flat)");
        assert_eq!(output(&["direction", "2"]), "1 (up)");
    }

    #[test]
    fn test_base_unit_conversion() {
        assert_eq!(output(&["to-base", "1.5", "-t", "WETH"]), "1500000000000000000");
        assert_eq!(output(&["from-base", "1500000", "-t", "usdc"]), "1.5");
        assert!(run_args(&["to-base", "abc"], &AmountConfig::default()).is_err());
    }

    #[test]
    fn test_check_uses_configured_bounds() {
        let mut config = AmountConfig::default();
        config.tokens.insert(
            "QUBE".to_string(),
            TokenSettings {
                decimals: 9,
                min_value: Some("1000000000".to_string()),
                max_value: None,
            },
        );

        let ok = run_args(&["check", "2", "--token", "QUBE"], &config).unwrap();
        assert_eq!(ok.plain(), "ok: 2000000000 base units");

        let low = run_args(&["check", "0.5", "--token", "qube"], &config).unwrap();
        assert!(!low.passed());

        assert!(run_args(&["check", "1", "--token", "NOPE"], &config).is_err());
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        assert!(run_args(&["amount", "1", "--token", "NOPE"], &AmountConfig::default()).is_err());
    }
}
