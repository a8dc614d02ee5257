//! Server-side beacon dispatch for Statsy.
//!
//! When no browser is around, events are sent straight to the collection
//! endpoint. One call walks a fixed sequence:
//!
//! 1. **Validate**: a request context is required
//! 2. **Resolve credential**: the first resolver in the chain that yields a
//!    token wins
//! 3. **Gate**: pageviews are only sent for requests that negotiate HTML
//! 4. **Build payload**: `{eventName, href, domain, referrer, props?}`
//! 5. **Send**: one authenticated `POST`
//!
//! Steps 1-2 fail loudly with a [`BeaconError`]. A failed send is logged and
//! reported as [`DispatchOutcome::SentButTransportFailed`] instead; tracking
//! must never fail the host request.
//!
//! # Example
//!
//! ```no_run
//! use statsy_beacon::{BeaconConfig, HttpTransport, ServerDispatcher};
//! use statsy_types::{Headers, RequestContext};
//!
//! # async fn run() -> statsy_beacon::BeaconResult<()> {
//! let transport = HttpTransport::new(BeaconConfig::default())?;
//! let dispatcher = ServerDispatcher::new(transport);
//!
//! let request = RequestContext::new(
//!     "https://example.com/",
//!     Headers::new().with("accept", "text/html"),
//! );
//! dispatcher.dispatch_pageview(Some(&request)).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod credential;
mod dispatcher;
mod error;
mod payload;
mod transport;

pub use config::{BeaconConfig, DEFAULT_ENDPOINT};
pub use credential::{
    Credential, CredentialChain, CredentialResolver, EnvVarResolver, SecretFileResolver,
    StaticResolver, API_KEY_ENV, API_KEY_FILE_ENV,
};
pub use dispatcher::{DispatchOutcome, ServerDispatcher};
pub use error::{BeaconError, BeaconResult, TransportError};
pub use payload::{BeaconPayload, BeaconRequest};
pub use transport::{BeaconResponse, HttpTransport, Transport};
