//! Beacon transport.

use crate::config::BeaconConfig;
use crate::error::{BeaconError, BeaconResult, TransportError};
use crate::payload::BeaconRequest;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use tracing::debug;

/// The collection endpoint's reply. No schema is consumed; any status is
/// returned as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconResponse {
    pub status: u16,
    pub body: String,
}

impl BeaconResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one prepared beacon.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &BeaconRequest) -> Result<BeaconResponse, TransportError>;
}

/// `reqwest`-backed transport posting JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: BeaconConfig,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: BeaconConfig) -> BeaconResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(BeaconError::Client)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BeaconConfig {
        &self.config
    }

    fn headers(request: &BeaconRequest) -> Result<HeaderMap, TransportError> {
        fn value(name: &'static str, raw: &str) -> Result<HeaderValue, TransportError> {
            HeaderValue::from_str(raw).map_err(|_| TransportError::InvalidHeader { name })
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-forwarded-for",
            value("X-Forwarded-For", &request.forwarded_for)?,
        );
        headers.insert(USER_AGENT, value("User-Agent", &request.user_agent)?);

        let mut auth = value("Authorization", &request.credential.bearer())?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &BeaconRequest) -> Result<BeaconResponse, TransportError> {
        let body = serde_json::to_vec(&request.payload)?;

        debug!(
            "Posting {} beacon to {}",
            request.payload.event_name, self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .headers(Self::headers(request)?)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(BeaconResponse { status, body })
    }
}
