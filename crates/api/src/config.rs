use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Event bus channel capacity.
    pub event_bus_capacity: usize,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
    /// JSON fixture loaded into the repositories at startup.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3030,
            event_bus_capacity: 1024,
            log_level: "info".to_string(),
            seed_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", "u16", defaults.port)?,
            event_bus_capacity: parse_or(
                &lookup,
                "EVENT_BUS_CAPACITY",
                "usize",
                defaults.event_bus_capacity,
            )?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            seed_path: lookup("SEED_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}
