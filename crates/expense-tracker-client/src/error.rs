//! Error types for the expense tracker client

use thiserror::Error;

/// Result type for expense tracker client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the expense tracker API
#[derive(Debug, Error)]
pub enum Error {
    /// API returned an error response
    ///
    /// The message is either the `error` field of the response body or a
    /// generic `Request failed with status N` fallback.
    #[error("{message}")]
    Request {
        /// Error message surfaced to the caller
        message: String,
        /// HTTP status code
        status: u16,
    },

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Build the error for a non-success response from the body text.
    ///
    /// Uses the `error` field of a JSON body when present; any other body,
    /// including one that fails to parse as JSON, falls back to a generic
    /// message carrying the status code. Parse failures are swallowed so a
    /// malformed error body never masks the HTTP failure itself.
    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Error::Request { message, status }
    }
}

#[derive(serde::Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}
