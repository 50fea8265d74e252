//! Runtime configuration, read from `STOCKROOM_*` environment variables.

use thiserror::Error;

use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const MAX_RETRIES_VAR: &str = "STOCKROOM_MAX_RETRIES";
pub const CANCEL_KEY_VAR: &str = "STOCKROOM_CANCEL_KEY";

pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_CANCEL_KEY: &str = "C";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Quantity at or below which the low-stock report lists a record.
    pub low_stock_threshold: u32,
    /// Re-prompts allowed for one field before the action is abandoned (>= 1).
    pub max_retries: u32,
    /// Input that cancels the current action, matched case-insensitively.
    pub cancel_key: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            max_retries: DEFAULT_MAX_RETRIES,
            cancel_key: DEFAULT_CANCEL_KEY.to_string(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            config.low_stock_threshold = parse_u32(LOW_STOCK_THRESHOLD_VAR, &value)?;
        }

        if let Some(value) = lookup(MAX_RETRIES_VAR) {
            let retries = parse_u32(MAX_RETRIES_VAR, &value)?;
            if retries == 0 {
                return Err(ConfigError::Invalid {
                    var: MAX_RETRIES_VAR,
                    value,
                    reason: "must be at least 1",
                });
            }
            config.max_retries = retries;
        }

        if let Some(value) = lookup(CANCEL_KEY_VAR) {
            let key = value.trim();
            if key.is_empty() {
                return Err(ConfigError::Invalid {
                    var: CANCEL_KEY_VAR,
                    value,
                    reason: "must not be empty",
                });
            }
            config.cancel_key = key.to_string();
        }

        Ok(config)
    }
}

fn parse_u32(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: "expected a non-negative integer",
    })
}
