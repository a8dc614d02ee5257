//! Core type definitions for the Statsy analytics SDK.
//!
//! This crate defines the value objects shared by the browser and server
//! surfaces:
//! - Events and their property values
//! - The inbound request context a server beacon is derived from
//! - The injection configuration supplied by framework adapters
//! - The event middleware capability registered with the tracking script
//!
//! Nothing in here owns state or performs I/O.

mod config;
mod event;
mod middleware;
mod request;

pub use config::{InjectionConfig, DEFAULT_TRACKING_DOMAIN};
pub use event::{Event, EventCategory, PropValue, Props, WebVital, PAGEVIEW};
pub use middleware::{EventMiddleware, SharedMiddleware};
pub use request::{Headers, RequestContext};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request url has no hostname: {0}")]
    MissingHostname(String),
}
