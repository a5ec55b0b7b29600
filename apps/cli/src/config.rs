//! # Configuration
//!
//! Shop settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSHOP_*`)
//! 2. JSON file named by `BOOKSHOP_CONFIG`
//! 3. Defaults (this file)
//!
//! Configuration is read-only after loading.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

pub const ENV_CONFIG_PATH: &str = "BOOKSHOP_CONFIG";
pub const ENV_SHOP_NAME: &str = "BOOKSHOP_NAME";
pub const ENV_CURRENCY_SYMBOL: &str = "BOOKSHOP_CURRENCY_SYMBOL";
pub const ENV_CURRENCY_DECIMALS: &str = "BOOKSHOP_CURRENCY_DECIMALS";

/// Largest minor-unit precision whose scale (10^18) still fits in an i64.
pub const MAX_CURRENCY_DECIMALS: u8 = 18;

/// Shop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopConfig {
    /// Shown in the header of listings.
    pub shop_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places in the minor unit.
    pub currency_decimals: u8,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            shop_name: "Bookshop".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ShopConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> CliResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG_PATH) {
            Some(path) => Self::from_file(&path)?,
            None => ShopConfig::default(),
        };

        if let Some(name) = lookup(ENV_SHOP_NAME) {
            config.shop_name = name;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup(ENV_CURRENCY_DECIMALS) {
            match raw.parse::<u8>() {
                Ok(decimals) if decimals <= MAX_CURRENCY_DECIMALS => {
                    config.currency_decimals = decimals
                }
                _ => warn!(value = %raw, "ignoring invalid {}", ENV_CURRENCY_DECIMALS),
            }
        }

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_string(),
            source,
        })?;

        let config: ShopConfig =
            serde_json::from_str(&raw).map_err(|source| CliError::ConfigParse {
                path: path.to_string(),
                source,
            })?;

        if config.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(CliError::ConfigInvalid {
                path: path.to_string(),
                reason: format!(
                    "currencyDecimals must be at most {MAX_CURRENCY_DECIMALS}, got {}",
                    config.currency_decimals
                ),
            });
        }

        Ok(config)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_cli::config::ShopConfig;
    ///
    /// let config = ShopConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    ///
    /// Precision above [`MAX_CURRENCY_DECIMALS`] is rendered at that maximum.
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_i64.checked_pow(u32::from(decimals)).unwrap_or(i64::MAX);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
