//! Host configuration parsed from environment variables.

use admin_client::config::{
    ConsoleConfig, DEFAULT_API_BASE_URL, DEFAULT_MODAL_CLOSE_DELAY_MS, DEFAULT_TEST_CITY, DEFAULT_TOAST_TTL_MS,
    DEFAULT_WEATHER_ENDPOINT,
};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub console: ConsoleConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ADMIN_API_URL`: backend REST base URL, default `http://localhost:5000/api`
    /// - `WEATHER_API_ENDPOINT`: key verification endpoint, default WeatherAPI.com current.json
    /// - `WEATHER_TEST_CITY`: fallback city for key tests, default `London`
    /// - `MODAL_CLOSE_DELAY_MS`: default 300
    /// - `TOAST_TTL_MS`: default 4000
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a numeric variable does not parse or a set
    /// URL/city variable is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&get, "PORT", DEFAULT_PORT)?;
        let api_base_url = non_empty(&get, "ADMIN_API_URL", DEFAULT_API_BASE_URL)?
            .trim_end_matches('/')
            .to_string();
        let weather_endpoint = non_empty(&get, "WEATHER_API_ENDPOINT", DEFAULT_WEATHER_ENDPOINT)?;
        let default_test_city = non_empty(&get, "WEATHER_TEST_CITY", DEFAULT_TEST_CITY)?;
        let modal_close_delay_ms = parse_number(&get, "MODAL_CLOSE_DELAY_MS", DEFAULT_MODAL_CLOSE_DELAY_MS)?;
        let toast_ttl_ms = parse_number(&get, "TOAST_TTL_MS", DEFAULT_TOAST_TTL_MS)?;

        Ok(Self {
            port,
            console: ConsoleConfig { api_base_url, weather_endpoint, default_test_city, modal_close_delay_ms, toast_ttl_ms },
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn non_empty(get: &impl Fn(&str) -> Option<String>, var: &'static str, default: &str) -> Result<String, ConfigError> {
    match get(var) {
        None => Ok(default.to_string()),
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::Empty { var }),
        Some(raw) => Ok(raw.trim().to_string()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
