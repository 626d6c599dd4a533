//! Configuration management for the contact book service.
//!
//! This module handles loading and validating configuration from environment variables,
//! with an optional `.env` file read first.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event, for log shippers
    Json,
}

/// Configuration for the contact book service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: "0.0.0.0")
    pub host: String,

    /// Port to bind (default: 8080)
    pub port: u16,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,

    /// Log output format (default: text)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_HOST`: Interface to bind (default: "0.0.0.0")
    /// - `CONTACTS_PORT`: Port to bind (default: 8080)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "text" or "json" (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let host = env::var("CONTACTS_HOST").unwrap_or(defaults.host);
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_HOST".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let port = Self::parse_env_u16("CONTACTS_PORT", defaults.port)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let log_format = Self::parse_log_format("LOG_FORMAT", defaults.log_format)?;

        Ok(Config {
            host,
            port,
            log_level,
            log_format,
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the bind address.
    pub fn bind_addr(&self) -> ConfigResult<SocketAddr> {
        self.socket_addr()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: "CONTACTS_HOST".to_string(),
                reason: format!("Not a valid IP address: {}", self.host),
            })
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_log_format(var_name: &str, default: LogFormat) -> ConfigResult<LogFormat> {
        match env::var(var_name) {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "text" => Ok(LogFormat::Text),
                "json" => Ok(LogFormat::Json),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be \"text\" or \"json\", got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
