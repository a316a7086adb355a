//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

/// Fallback admin secret used when `ADMIN_SECRET` is not set.
///
/// Suitable only for local demos; startup logs a warning when the
/// service runs with this value.
pub const DEFAULT_ADMIN_SECRET: &str = "letmein";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for cached lookups
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Shared secret gating the admin surface
    pub admin_secret: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Cache TTL in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 30)
    /// - `ADMIN_SECRET` - Admin access secret (default: insecure demo value)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            admin_secret: env::var("ADMIN_SECRET")
                .unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: 60,
            server_port: 3000,
            cleanup_interval: 30,
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 30);
        assert_eq!(config.admin_secret, DEFAULT_ADMIN_SECRET);
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::remove_var("DEFAULT_TTL");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("ADMIN_SECRET");

        let config = Config::from_env();
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 30);
        assert_eq!(config.admin_secret, DEFAULT_ADMIN_SECRET);
    }
}
