//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_DATA_DIR` - Directory holding the persisted cart (default: `./.cart`)

use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./.cart";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory used by the file backed key-value store
    pub data_dir: PathBuf,
}

impl CartConfig {
    /// Load configuration from the process environment, honouring a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = match lookup("CART_DATA_DIR") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_DATA_DIR".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_DATA_DIR),
        };
        Ok(Self { data_dir })
    }
}
