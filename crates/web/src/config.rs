//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOCKROOM_HOST` - Bind address (default: 127.0.0.1)
//! - `STOCKROOM_PORT` - Listen port (default: 3000)
//! - `STORE_API_URL` - Product-collection endpoint
//!   (default: <https://fakestoreapi.com/products>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

const DEFAULT_STORE_API_URL: &str = "https://fakestoreapi.com/products";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Stockroom application configuration.
#[derive(Debug, Clone)]
pub struct StockroomConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote product-collection endpoint
    pub store_api_url: Url,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl StockroomConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOCKROOM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOCKROOM_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_PORT".to_string(), e.to_string()))?;
        let store_api_url = get_env_or_default("STORE_API_URL", DEFAULT_STORE_API_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("STORE_API_URL".to_string(), e.to_string()))?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            store_api_url,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
