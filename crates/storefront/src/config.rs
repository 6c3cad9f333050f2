//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run a local instance against the
//! public Fake Store API.
//!
//! - `VERDANT_HOST` - Bind address (default: 127.0.0.1)
//! - `VERDANT_PORT` - Listen port (default: 3000)
//! - `FAKESTORE_API_URL` - Base URL of the upstream catalog API
//!   (default: `https://fakestoreapi.com`)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Upstream catalog API configuration
    pub fakestore: FakeStoreConfig,
}

/// Fake Store API configuration.
#[derive(Debug, Clone)]
pub struct FakeStoreConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
}

impl StorefrontConfig {
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

        let host = get_env_or_default("VERDANT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VERDANT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("VERDANT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VERDANT_PORT".to_string(), e.to_string()))?;
        let fakestore = FakeStoreConfig::from_env()?;

        Ok(Self {
            host,
            port,
            fakestore,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl FakeStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = get_env_or_default("FAKESTORE_API_URL", "https://fakestoreapi.com");
        let base_url = validate_api_url("FAKESTORE_API_URL", &raw)?;
        Ok(Self { base_url })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate an upstream API base URL and normalize away any trailing slash.
fn validate_api_url(var_name: &str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "URL must have a host".to_string(),
        ));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url_normalizes_trailing_slash() {
        let url = validate_api_url("TEST_VAR", "https://fakestoreapi.com/").unwrap();
        assert_eq!(url, "https://fakestoreapi.com");
    }

    #[test]
    fn test_validate_api_url_accepts_http() {
        let url = validate_api_url("TEST_VAR", "http://localhost:8080").unwrap();
        assert_eq!(url, "http://localhost:8080");
    }

    #[test]
    fn test_validate_api_url_rejects_garbage() {
        let result = validate_api_url("TEST_VAR", "not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_validate_api_url_rejects_non_http_scheme() {
        let result = validate_api_url("TEST_VAR", "ftp://fakestoreapi.com");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            fakestore: FakeStoreConfig {
                base_url: "https://fakestoreapi.com".to_string(),
            },
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
