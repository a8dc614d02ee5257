//! Error types for script injection.

use thiserror::Error;

/// Result type for injection operations.
pub type InjectResult<T> = Result<T, InjectError>;

/// Configuration errors raised before anything touches the page.
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("the `siteId` is required for Statsy Analytics")]
    MissingSiteId,

    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
