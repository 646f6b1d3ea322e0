//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FLUXTRADE_DATA_DIR` - Directory for the durable key-value store
//!   (default: `./fluxtrade-data`)
//! - `FLUXTRADE_TAX_RATE` - Flat tax rate applied at order placement when
//!   the caller supplies neither a rate nor an amount (default: 0.12)

use std::path::PathBuf;

use rust_decimal::{dec, Decimal};
use thiserror::Error;

/// Default flat tax rate (12%) applied when an order payload carries
/// neither an explicit tax amount nor a rate.
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.12);

/// Default data directory for the file-backed store.
pub const DEFAULT_DATA_DIR: &str = "./fluxtrade-data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON document per storage key.
    pub data_dir: PathBuf,
    /// Flat tax rate used by order placement.
    pub tax_rate: Decimal,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a supplied variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("FLUXTRADE_DATA_DIR", DEFAULT_DATA_DIR));
        let tax_rate = match std::env::var("FLUXTRADE_TAX_RATE") {
            Ok(raw) => raw.parse::<Decimal>().map_err(|e| {
                ConfigError::InvalidEnvVar("FLUXTRADE_TAX_RATE".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TAX_RATE,
        };

        Ok(Self { data_dir, tax_rate })
    }

    /// Build a configuration rooted at an explicit data directory.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
