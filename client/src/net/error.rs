//! Failure taxonomy for backend and weather-endpoint calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a REST call did not produce a usable result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection reset, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The call is only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection, using `fallback` when the backend sent no error text.
    pub fn rejected(status: u16, message: Option<String>, fallback: &str) -> Self {
        let message = message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        Self::Rejected { status, message }
    }

    /// Whether the backend saw and refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
