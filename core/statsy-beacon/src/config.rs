//! Beacon configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The collection endpoint beacons are posted to.
pub const DEFAULT_ENDPOINT: &str = "https://api.statsy.com/v1/beep";

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeaconConfig {
    /// Full URL of the collection endpoint.
    pub endpoint: String,
    /// Request timeout in seconds. `0` disables the timeout.
    pub timeout_secs: u64,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl BeaconConfig {
    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
