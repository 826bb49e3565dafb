use std::env;
use log::debug;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 256 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub max_payload_bytes: usize,
}

impl ServerConfig {
    /// Reads the server settings from the process environment
    /// (after `.env` has been loaded).
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("SERVER_PORT", lookup("SERVER_PORT"), DEFAULT_PORT)?;
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let max_payload_bytes = parse_or(
            "MAX_PAYLOAD_BYTES",
            lookup("MAX_PAYLOAD_BYTES"),
            DEFAULT_MAX_PAYLOAD_BYTES,
        )?;

        Ok(ServerConfig {
            host,
            port,
            log_level,
            max_payload_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => {
            debug!("{} not set, using default", name);
            Ok(default)
        }
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
