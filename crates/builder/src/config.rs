//! Builder configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BRGRR_DATA_DIR` - Directory for local storage (default: `.brgrr`)
//! - `BRGRR_CONFIRM_DELAY_MS` - Pause before leaving the confirmation screen
//!   (default: 700, 0 disables)
//! - `RUST_LOG` - Log filter, read by the front-end's tracing subscriber

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".brgrr";
const DEFAULT_CONFIRM_DELAY_MS: &str = "700";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Builder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Where favorites are kept between sessions.
    pub data_dir: PathBuf,
    /// Cosmetic pause between confirming an order and returning to editing.
    pub confirm_delay: Duration,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            confirm_delay: Duration::from_millis(700),
        }
    }
}

impl BuilderConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let data_dir = PathBuf::from(get_or_default("BRGRR_DATA_DIR", DEFAULT_DATA_DIR));
        let confirm_delay = get_or_default("BRGRR_CONFIRM_DELAY_MS", DEFAULT_CONFIRM_DELAY_MS)
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BRGRR_CONFIRM_DELAY_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            data_dir,
            confirm_delay,
        })
    }
}
