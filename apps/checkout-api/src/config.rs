//! Checkout API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5080;

/// Checkout API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Allow cross-origin requests from any origin
    pub cors_any: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_any: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable             | Default   |
    /// |----------------------|-----------|
    /// | `CHECKOUT_BIND_ADDR` | `0.0.0.0` |
    /// | `CHECKOUT_PORT`      | `5080`    |
    /// | `CHECKOUT_CORS_ANY`  | `true`    |
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let bind_addr = lookup("CHECKOUT_BIND_ADDR").unwrap_or(defaults.bind_addr);
        if bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("CHECKOUT_BIND_ADDR".to_string()));
        }

        let port = match lookup("CHECKOUT_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CHECKOUT_PORT".to_string()))?,
            None => defaults.port,
        };

        let cors_any = match lookup("CHECKOUT_CORS_ANY") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("CHECKOUT_CORS_ANY".to_string()))?,
            None => defaults.cors_any,
        };

        Ok(ApiConfig {
            bind_addr,
            port,
            cors_any,
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
