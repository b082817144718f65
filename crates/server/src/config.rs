//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `NUTRITION_HOST` - Bind address (default: 127.0.0.1)
//! - `NUTRITION_PORT` - Listen port, falls back to `PORT` (default: 3000)
//! - `NUTRITION_DATA_FILE` - Path of the JSON document (default: data.json)
//! - `NUTRITION_PUBLIC_DIR` - Static client assets served at `/` (default: public)
//! - `NUTRITION_CATALOG_FILE` - JSON `{foods, products}` replacing the built-in catalog
//! - `NUTRITION_LOG_JSON` - Emit logs as JSON when set
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Backing file for the customer document
    pub data_file: PathBuf,
    /// Directory of static client assets
    pub public_dir: PathBuf,
    /// Optional catalog override
    pub catalog_file: Option<PathBuf>,
    /// Emit JSON-formatted logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. production, staging)
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for unparseable host or port values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("NUTRITION_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("NUTRITION_HOST".to_string(), e.to_string()))?;

        let (port_key, port) = lookup("NUTRITION_PORT")
            .map(|v| ("NUTRITION_PORT", v))
            .or_else(|| lookup("PORT").map(|v| ("PORT", v)))
            .unwrap_or(("NUTRITION_PORT", "3000".to_string()));
        let port = port
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar(port_key.to_string(), e.to_string()))?;

        let data_file = lookup("NUTRITION_DATA_FILE").map_or_else(|| "data.json".into(), PathBuf::from);
        let public_dir = lookup("NUTRITION_PUBLIC_DIR").map_or_else(|| "public".into(), PathBuf::from);
        let catalog_file = lookup("NUTRITION_CATALOG_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_json = lookup("NUTRITION_LOG_JSON").is_some_and(|v| is_truthy(&v));

        Ok(Self {
            host,
            port,
            data_file,
            public_dir,
            catalog_file,
            log_json,
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
