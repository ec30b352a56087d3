//! Ledger configuration (file location, low-stock threshold).

use std::path::PathBuf;

use crate::ledger::DEFAULT_LOW_STOCK_THRESHOLD;

pub const DEFAULT_DATA_FILE: &str = "inventory.json";

pub const DATA_FILE_ENV: &str = "STOCKLEDGER_FILE";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKLEDGER_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub data_file: PathBuf,
    pub low_stock_threshold: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl LedgerConfig {
    /// Build configuration from `STOCKLEDGER_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(file);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(threshold) if threshold.is_finite() => config.low_stock_threshold = threshold,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_LOW_STOCK_THRESHOLD,
                    "{LOW_STOCK_THRESHOLD_ENV} is not a number; using default"
                ),
            }
        }

        config
    }
}
