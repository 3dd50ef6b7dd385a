//! Error classification for backend calls.

use thiserror::Error;

/// Errors from the cart and purchase endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to construct the HTTP client.
    #[error("Failed to build API client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The server responded with a non-success status.
    #[error("Server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// No response was received at all.
    #[error("Server unreachable: {source}")]
    Unreachable {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered 2xx with a body we could not decode.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}
