//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;

use basket_core::MOCK_USER_ID;
use serde::{Deserialize, Serialize};

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// User key every cart route operates on, until real identity
    /// resolution replaces it
    pub mock_user_id: String,

    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            mock_user_id: MOCK_USER_ID.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `BASKET_HOST`: bind address (default `0.0.0.0`)
    /// - `BASKET_PORT`: port (default `8080`)
    /// - `BASKET_MOCK_USER_ID`: user key (default `testUser123`)
    /// - `BASKET_LOG`: default log filter (default `info`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let port = match lookup("BASKET_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BASKET_PORT".to_string()))?,
            None => defaults.port,
        };

        let mock_user_id = lookup("BASKET_MOCK_USER_ID").unwrap_or(defaults.mock_user_id);
        if mock_user_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BASKET_MOCK_USER_ID".to_string()));
        }

        let config = ApiConfig {
            host: lookup("BASKET_HOST").unwrap_or(defaults.host),
            port,
            mock_user_id,
            log_level: lookup("BASKET_LOG").unwrap_or(defaults.log_level),
        };

        // Validate the bind address up front
        config.socket_addr()?;

        Ok(config)
    }

    /// Socket address to bind the HTTP listener to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BASKET_HOST".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
