//! Error types for the outbound HTTP call.

use thiserror::Error;

/// Errors that can occur while calling the remote endpoint.
///
/// The `Display` text of each variant is what the client sees in the
/// `data` member of the resulting JSON-RPC error.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The configured endpoint is not an absolute http(s) URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The endpoint string as configured.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The request exceeded the configured timeout.
    #[error("Request timeout")]
    Timeout,
    /// Connection, TLS or I/O failure.
    #[error("{0}")]
    Transport(String),
    /// The response body was not valid JSON. Carries the raw body.
    #[error("Failed to parse response: {body}")]
    InvalidResponse {
        /// The raw response body text.
        body: String,
    },
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(e.to_string())
        }
    }
}
