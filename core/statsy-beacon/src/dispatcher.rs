//! Server-side event dispatch.

use crate::credential::CredentialChain;
use crate::error::{BeaconError, BeaconResult};
use crate::payload::{BeaconPayload, BeaconRequest};
use crate::transport::{BeaconResponse, Transport};
use statsy_types::{EventCategory, Props, RequestContext, PAGEVIEW};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a dispatch call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The beacon was posted; the response is returned whatever its status.
    Sent(BeaconResponse),
    /// A pageview for a request that does not negotiate HTML.
    SkippedByPolicy,
    /// The POST failed; the error was logged and swallowed.
    SentButTransportFailed(String),
}

impl DispatchOutcome {
    pub fn was_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent(_))
    }

    pub fn response(&self) -> Option<&BeaconResponse> {
        match self {
            DispatchOutcome::Sent(response) => Some(response),
            _ => None,
        }
    }
}

/// Sends events straight to the collection endpoint.
#[derive(Clone)]
pub struct ServerDispatcher {
    credentials: Arc<CredentialChain>,
    transport: Arc<dyn Transport>,
}

impl ServerDispatcher {
    /// A dispatcher using the default credential chain.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_credentials(transport, CredentialChain::default())
    }

    pub fn with_credentials(
        transport: impl Transport + 'static,
        credentials: CredentialChain,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            transport: Arc::new(transport),
        }
    }

    pub fn credentials(&self) -> &CredentialChain {
        &self.credentials
    }

    /// Tracks a pageview for `request`.
    pub async fn dispatch_pageview(
        &self,
        request: Option<&RequestContext>,
    ) -> BeaconResult<DispatchOutcome> {
        self.dispatch(request, PAGEVIEW, None).await
    }

    /// Tracks `event_name` for `request`.
    ///
    /// Missing request context and missing credentials are returned as
    /// errors before any network attempt. Pageviews for requests that do not
    /// accept or carry `text/html` are skipped. Transport failures are logged
    /// and reported through the outcome, never as an error.
    pub async fn dispatch(
        &self,
        request: Option<&RequestContext>,
        event_name: &str,
        props: Option<Props>,
    ) -> BeaconResult<DispatchOutcome> {
        let request = request.ok_or(BeaconError::MissingRequest)?;
        let credential = self.credentials.resolve()?;
        let domain = request.hostname()?;

        if EventCategory::of(event_name) == EventCategory::Pageview && !request.accepts_html() {
            debug!("Skipping pageview for non-HTML request: {}", request.url);
            return Ok(DispatchOutcome::SkippedByPolicy);
        }

        let headers = &request.headers;
        let beacon = BeaconRequest {
            payload: BeaconPayload {
                event_name: event_name.to_string(),
                href: request.url.clone(),
                domain,
                referrer: headers.get_or_empty("referer").to_string(),
                props,
            },
            forwarded_for: headers.get_or_empty("x-forwarded-for").to_string(),
            user_agent: headers.get_or_empty("user-agent").to_string(),
            credential,
        };

        match self.transport.send(&beacon).await {
            Ok(response) => {
                debug!(
                    "Beacon {} for {} answered {}",
                    event_name, beacon.payload.domain, response.status
                );
                Ok(DispatchOutcome::Sent(response))
            }
            Err(e) => {
                warn!("Statsy beacon for {} failed: {}", event_name, e);
                Ok(DispatchOutcome::SentButTransportFailed(e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for ServerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerDispatcher")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
