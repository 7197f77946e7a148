//! Built-in token precision registry
//!
//! Precisions of well-known tokens, used when a token is not listed in the
//! loaded configuration.

/// Token precisions (decimal places)
pub mod decimals {
    /// Wrapped Ethereum
    pub const WETH: u32 = 18;

    /// USD Coin
    pub const USDC: u32 = 6;

    /// Tether USD
    pub const USDT: u32 = 6;

    /// Dai Stablecoin
    pub const DAI: u32 = 18;

    /// Wrapped Bitcoin
    pub const WBTC: u32 = 8;

    /// Native chain token
    pub const EVER: u32 = 9;

    /// Wrapped native token
    pub const WEVER: u32 = 9;
}

/// Known symbols and their precisions
pub const KNOWN_TOKENS: &[(&str, u32)] = &[
    ("WETH", decimals::WETH),
    ("USDC", decimals::USDC),
    ("USDT", decimals::USDT),
    ("DAI", decimals::DAI),
    ("WBTC", decimals::WBTC),
    ("EVER", decimals::EVER),
    ("WEVER", decimals::WEVER),
];

/// Look up a built-in precision by symbol (case-insensitive)
pub fn known_decimals(symbol: &str) -> Option<u32> {
    KNOWN_TOKENS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(symbol))
        .map(|(_, decimals)| *decimals)
}
