//! Shared test helpers for beacon tests.

#![allow(dead_code)]

use async_trait::async_trait;
use statsy_beacon::{BeaconRequest, BeaconResponse, Transport, TransportError};
use statsy_types::{Headers, RequestContext};
use std::sync::{Arc, Mutex};

/// Records every beacon and answers with a fixed status.
#[derive(Clone)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<BeaconRequest>>>,
    status: u16,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::with_status(202)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            status,
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<BeaconRequest> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &BeaconRequest) -> Result<BeaconResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(BeaconResponse {
            status: self.status,
            body: String::new(),
        })
    }
}

/// Fails every send.
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: &BeaconRequest) -> Result<BeaconResponse, TransportError> {
        Err(TransportError::Other("connection reset by peer".to_string()))
    }
}

/// A browser navigation to `https://example.com/`.
pub fn html_request() -> RequestContext {
    RequestContext::new("https://example.com/", Headers::new().with("accept", "text/html"))
}

/// An API call to `https://example.com/api`.
pub fn json_request() -> RequestContext {
    RequestContext::new(
        "https://example.com/api",
        Headers::new()
            .with("accept", "application/json")
            .with("content-type", "application/json"),
    )
}
