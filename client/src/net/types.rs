//! Wire DTOs for the bot backend and the weather verification endpoint.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. User ids arrive as `_id`
//! from the backend's document store; `id` is accepted as an alias so test
//! fixtures and alternate backends deserialize the same way.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A bot subscriber as listed by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub telegram_id: String,
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub blocked: bool,
}

/// Per-admin bot settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub weather_api_key: String,
    pub city: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`: a token on success or an error text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of a weather API key verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResult {
    pub success: bool,
    pub message: String,
}

impl TestResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }

    /// Modal heading for this result.
    pub fn title(&self) -> &'static str {
        if self.success { "Test Successful" } else { "Test Failed" }
    }
}

/// The subset of a current-weather payload used to describe a successful test.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub location: WeatherLocation,
    pub current: CurrentWeather,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherLocation {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub condition: WeatherCondition,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherCondition {
    pub text: String,
}

impl WeatherReport {
    /// One-line summary, e.g. `Paris: 18.5°C, Partly cloudy`.
    pub fn summary(&self) -> String {
        format!("{}: {}°C, {}", self.location.name, self.current.temp_c, self.current.condition.text)
    }
}

/// Telegram ids are numeric in some backend versions and strings in others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}
