//! Facade error type.

use statsy_beacon::BeaconError;
use statsy_inject::InjectError;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors surfaced to framework glue.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error(transparent)]
    Beacon(#[from] BeaconError),
}
