//! Beacon wire format.

use crate::credential::Credential;
use serde::{Deserialize, Serialize};
use statsy_types::Props;

/// JSON body posted to the collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconPayload {
    pub event_name: String,
    pub href: String,
    pub domain: String,
    pub referrer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
}

/// A fully prepared beacon: body plus the passthrough headers.
#[derive(Debug, Clone)]
pub struct BeaconRequest {
    pub payload: BeaconPayload,
    /// Inbound `X-Forwarded-For`, empty when absent.
    pub forwarded_for: String,
    /// Inbound `User-Agent`, empty when absent.
    pub user_agent: String,
    pub credential: Credential,
}
