use std::env;

use crate::models::form::{MONTH_RANGE, YEAR_RANGE};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub default_year: i32,
    pub default_month: u32,
    pub session_ttl_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            default_year: 2024,
            default_month: 12,
            session_ttl_minutes: 720,
        }
    }
}

impl Config {
    /// Read the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_port = match lookup("SERVER_PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v))?,
            None => defaults.server_port,
        };

        let default_year = match lookup("DEFAULT_YEAR") {
            Some(v) => v
                .parse::<i32>()
                .ok()
                .filter(|y| YEAR_RANGE.contains(y))
                .ok_or(ConfigError::InvalidYear(v))?,
            None => defaults.default_year,
        };

        let default_month = match lookup("DEFAULT_MONTH") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|m| MONTH_RANGE.contains(m))
                .ok_or(ConfigError::InvalidMonth(v))?,
            None => defaults.default_month,
        };

        let session_ttl_minutes = match lookup("SESSION_TTL_MINUTES") {
            Some(v) => v
                .parse::<i64>()
                .ok()
                .filter(|m| *m > 0)
                .ok_or(ConfigError::InvalidSessionTtl(v))?,
            None => defaults.session_ttl_minutes,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            default_year,
            default_month,
            session_ttl_minutes,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("DEFAULT_YEAR must be within 2023-2030, got {0}")]
    InvalidYear(String),
    #[error("DEFAULT_MONTH must be within 1-12, got {0}")]
    InvalidMonth(String),
    #[error("SESSION_TTL_MINUTES must be a positive number, got {0}")]
    InvalidSessionTtl(String),
}
