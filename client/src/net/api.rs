//! REST helpers for the bot backend and the weather verification endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A non-2xx status is a
//! rejection; the pages decide how each failure is surfaced.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, Settings, TestResult, User};
use crate::config::ConsoleConfig;
use crate::state::users::UserAction;

/// Message shown when the weather endpoint answers with a non-2xx status.
pub const KEY_REJECTED_MESSAGE: &str = "Invalid API Key or request failed";

/// Login error shown when the backend refuses without explaining why.
pub const LOGIN_FAILED: &str = "Login failed";

/// HTTP method used by a [`UserAction`] request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Delete,
}

/// Browser URL for the federated (Google) login entry point.
pub fn google_login_url(config: &ConsoleConfig) -> String {
    config.api_url("/auth/google")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_action_request(config: &ConsoleConfig, id: &str, action: UserAction) -> (Method, String) {
    let id = urlencoding::encode(id);
    match action {
        UserAction::Block => (Method::Post, config.api_url(&format!("/users/{id}/block"))),
        UserAction::Unblock => (Method::Post, config.api_url(&format!("/users/{id}/unblock"))),
        UserAction::Delete => (Method::Delete, config.api_url(&format!("/users/{id}"))),
    }
}

/// Weather query URL for verifying `key`, falling back to the configured test
/// city when `city` is blank.
#[cfg(any(test, feature = "hydrate"))]
fn weather_query_url(config: &ConsoleConfig, key: &str, city: &str) -> String {
    let city = if city.trim().is_empty() { config.default_test_city.as_str() } else { city.trim() };
    format!(
        "{}?key={}&q={}",
        config.weather_endpoint,
        urlencoding::encode(key.trim()),
        urlencoding::encode(city)
    )
}

/// Map a weather endpoint response onto a key-test result.
#[cfg(any(test, feature = "hydrate"))]
fn key_test_result(ok: bool, body: Result<super::types::WeatherReport, String>) -> TestResult {
    if !ok {
        return TestResult::failure(KEY_REJECTED_MESSAGE);
    }
    match body {
        Ok(report) => TestResult::success(report.summary()),
        Err(message) => TestResult::failure(message),
    }
}

#[cfg(feature = "hydrate")]
fn authed(builder: gloo_net::http::RequestBuilder, token: &str) -> gloo_net::http::RequestBuilder {
    builder.header("Authorization", &crate::state::session::bearer_header(token))
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }
    let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.error);
    ApiError::rejected(resp.status(), message, fallback)
}

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// # Errors
///
/// `Rejected` carries the backend's `error` text (or "Login failed");
/// `Network`/`Decode` cover transport and body failures.
pub async fn login(config: &ConsoleConfig, credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::LoginResponse;

        let resp = gloo_net::http::Request::post(&config.api_url("/auth/login"))
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let status = resp.status();
        let ok = resp.ok();
        let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        match (ok, body.token) {
            (true, Some(token)) => Ok(token),
            (true, None) => Err(ApiError::Decode("login response carried no token".to_owned())),
            (false, _) => Err(ApiError::rejected(status, body.error, LOGIN_FAILED)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the admin's bot settings via `GET /settings`.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body is malformed.
pub async fn fetch_settings(config: &ConsoleConfig, token: &str) -> Result<Settings, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(&config.api_url("/settings")), token)
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "settings request failed").await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Persist the full settings object via `POST /settings`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend answers non-2xx.
pub async fn save_settings(config: &ConsoleConfig, token: &str, settings: &Settings) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::post(&config.api_url("/settings")), token)
            .json(settings)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "settings update failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, settings);
        Err(ApiError::Unavailable)
    }
}

/// List bot subscribers via `GET /users`.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body is malformed.
pub async fn fetch_users(config: &ConsoleConfig, token: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(&config.api_url("/users")), token)
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, "users request failed").await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Block, unblock or delete one user.
///
/// # Errors
///
/// Returns an error if the request fails or the backend answers non-2xx.
pub async fn apply_user_action(
    config: &ConsoleConfig,
    token: &str,
    id: &str,
    action: UserAction,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (method, url) = user_action_request(config, id, action);
        let builder = match method {
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        };
        let resp = authed(builder, token).send().await.map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp, action.failure_message()).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, id, action);
        Err(ApiError::Unavailable)
    }
}

/// Query the weather endpoint with `key` and report whether it works.
///
/// Never fails: transport and decode errors become a failure result carrying
/// the error's text.
pub async fn test_weather_key(config: &ConsoleConfig, key: &str, city: &str) -> TestResult {
    #[cfg(feature = "hydrate")]
    {
        let url = weather_query_url(config, key, city);
        match gloo_net::http::Request::get(&url).send().await {
            Ok(resp) => {
                let ok = resp.ok();
                let body = if ok { resp.json().await.map_err(|e| e.to_string()) } else { Err(String::new()) };
                key_test_result(ok, body)
            }
            Err(e) => TestResult::failure(e.to_string()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, key, city);
        TestResult::failure(ApiError::Unavailable.to_string())
    }
}
