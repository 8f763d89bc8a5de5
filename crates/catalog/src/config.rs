//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_MONGODB_URI` - MongoDB connection string (default: mongodb://localhost:27017)
//! - `CATALOG_DATABASE` - Database name (default: plant_catalog)
//! - `CATALOG_HOST` - Bind address (default: 127.0.0.1)
//! - `CATALOG_PORT` - Listen port (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//!
//! `MONGODB_URI` is honored as a fallback for `CATALOG_MONGODB_URI` so the
//! service picks up the connection string a managed MongoDB attach sets.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog application configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// MongoDB connection URI (may contain credentials)
    pub mongodb_uri: SecretString,
    /// Name of the MongoDB database holding the collections
    pub database: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., production, staging)
    pub sentry_environment: Option<String>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mongodb_uri = get_mongodb_uri();
        let database = get_env_or_default("CATALOG_DATABASE", "plant_catalog");
        let host = get_env_or_default("CATALOG_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CATALOG_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_PORT".to_string(), e.to_string()))?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            mongodb_uri,
            database,
            host,
            port,
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

/// Get the MongoDB URI with fallback to generic `MONGODB_URI`.
fn get_mongodb_uri() -> SecretString {
    if let Ok(value) = std::env::var("CATALOG_MONGODB_URI") {
        return SecretString::from(value);
    }
    if let Ok(value) = std::env::var("MONGODB_URI") {
        return SecretString::from(value);
    }
    SecretString::from(DEFAULT_MONGODB_URI)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> CatalogConfig {
        CatalogConfig {
            mongodb_uri: SecretString::from(DEFAULT_MONGODB_URI),
            database: "plant_catalog_test".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("CATALOG_DATABASE".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: CATALOG_DATABASE"
        );

        let err = ConfigError::InvalidEnvVar("CATALOG_PORT".to_string(), "bad port".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable CATALOG_PORT: bad port"
        );
    }
}
