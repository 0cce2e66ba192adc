//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Capacity is checked when the cache is built, not here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub cache_capacity: usize,
    /// HTTP server port
    pub port: u16,
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "debug")
    pub log_level: String,
    /// Line format for console and file logs
    pub log_format: LogFormat,
    /// Directory for the log file; console only when unset
    pub logs_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `APP_CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `APP_PORT` - HTTP server port (default: 8000)
    /// - `APP_LOG_LEVEL` - Log level (default: info)
    /// - `APP_LOG_FORMAT` - `pretty` or `json` (default: pretty)
    /// - `APP_LOGS_PATH` - Directory for the log file (default: unset, console only)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: env::var("APP_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            port: env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var("APP_LOG_LEVEL")
                .ok()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
            log_format: env::var("APP_LOG_FORMAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
            logs_path: env::var("APP_LOGS_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Tracing filter directive for this crate and the HTTP trace layer.
    pub fn log_filter(&self) -> String {
        format!(
            "lru_ttl_cache={level},tower_http={level}",
            level = self.log_level
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            port: 8000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            logs_path: None,
        }
    }
}
