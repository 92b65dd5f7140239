//! Process configuration, read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `CATALOG_ADDR` | `0.0.0.0:8080` |
//! | `CATALOG_SEED` | `true` |
//! | `CATALOG_LOG_FORMAT` | `json` |

use std::net::SocketAddr;

use catalog_observability::LogFormat;
use thiserror::Error;

pub const ADDR_VAR: &str = "CATALOG_ADDR";
pub const SEED_VAR: &str = "CATALOG_SEED";
pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address `{value}`")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected a boolean (true/false/1/0/yes/no), got `{value}`")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {reason}")]
    InvalidLogFormat { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,
    /// Load the default catalog at startup.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { var: ADDR_VAR, value })?;
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_bool(&value)
                .ok_or(ConfigError::InvalidBool { var: SEED_VAR, value })?;
        }

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = value
                .parse()
                .map_err(|reason| ConfigError::InvalidLogFormat { var: LOG_FORMAT_VAR, reason })?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
