//! Beacon error types.

use thiserror::Error;

/// Result type for beacon operations.
pub type BeaconResult<T> = Result<T, BeaconError>;

/// Configuration errors. Raised before any network attempt.
#[derive(Debug, Error)]
pub enum BeaconError {
    #[error("a request context is required for server-side tracking")]
    MissingRequest,

    #[error("no API key found (tried: {}); set the STATSY_API_KEY environment variable", .tried.join(", "))]
    MissingCredential { tried: Vec<&'static str> },

    #[error("invalid request url: {0}")]
    InvalidRequestUrl(#[from] statsy_types::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors from the transport layer. Never surfaced by the dispatcher.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid header value for {name}")]
    InvalidHeader { name: &'static str },

    #[error("transport failed: {0}")]
    Other(String),
}

impl TransportError {
    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}
