//! Deployment configuration shared by the server render and the hydrated app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server resolves `ConsoleConfig` from its environment, provides it as
//! Leptos context while rendering, and embeds it in the HTML shell as a
//! `<meta name="console-config">` JSON payload. The hydrate entry point reads
//! that payload back so both renders see the same backend URLs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.weatherapi.com/v1/current.json";
pub const DEFAULT_TEST_CITY: &str = "London";
pub const DEFAULT_MODAL_CLOSE_DELAY_MS: u64 = 300;
pub const DEFAULT_TOAST_TTL_MS: u64 = 4000;

/// Name attribute of the shell `<meta>` tag carrying the serialized config.
pub const META_NAME: &str = "console-config";

/// Backend endpoints and UI timings for one deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    /// Base URL of the bot backend REST API, without a trailing slash.
    pub api_base_url: String,
    /// Third-party weather query endpoint used for key verification.
    pub weather_endpoint: String,
    /// City used for key verification when the form city is blank.
    pub default_test_city: String,
    pub modal_close_delay_ms: u64,
    pub toast_ttl_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            weather_endpoint: DEFAULT_WEATHER_ENDPOINT.to_owned(),
            default_test_city: DEFAULT_TEST_CITY.to_owned(),
            modal_close_delay_ms: DEFAULT_MODAL_CLOSE_DELAY_MS,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

impl ConsoleConfig {
    /// Join a backend path (leading `/`) onto the API base URL.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url.trim_end_matches('/'))
    }

    /// Serialize for the shell `<meta>` tag.
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse the shell `<meta>` payload, falling back to defaults on any error.
    pub fn from_meta_content(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Read the config embedded by the server into the current document.
    ///
    /// Returns defaults outside the browser or when the tag is missing.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            content.map_or_else(Self::default, |raw| Self::from_meta_content(&raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
