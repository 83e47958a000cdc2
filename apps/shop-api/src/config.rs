//! Shop API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

/// Shop API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind
    pub http_host: IpAddr,

    /// HTTP server port
    pub http_port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Upper bound on pooled SQLite connections
    pub db_max_connections: u32,

    /// Shared secret used to verify bearer tokens (HS256)
    pub jwt_secret: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            http_host: lookup("HTTP_HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_HOST".to_string()))?,

            http_port: lookup("HTTP_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: lookup("DATABASE_PATH")
                .unwrap_or_else(|| "./shopfront.db".to_string()),

            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            // In production, this MUST be set via environment variable
            jwt_secret: lookup("JWT_SECRET")
                .unwrap_or_else(|| "shopfront-dev-secret-change-in-production".to_string()),
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        if config.jwt_secret.is_empty() {
            return Err(ConfigError::MissingRequired("JWT_SECRET".to_string()));
        }

        Ok(config)
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_path, "./shopfront.db");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", "9000"),
            ("DATABASE_PATH", "/tmp/shop.db"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("JWT_SECRET", "s3cret"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.database_path, "/tmp/shop.db");
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.jwt_secret, "s3cret");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load_from(&[("HTTP_PORT", "eighty")]),
            Err(ConfigError::InvalidValue(key)) if key == "HTTP_PORT"
        ));
        assert!(matches!(
            load_from(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load_from(&[("JWT_SECRET", "")]),
            Err(ConfigError::MissingRequired(_))
        ));
    }
}
