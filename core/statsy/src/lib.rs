//! Statsy analytics SDK.
//!
//! One entry point for both runtime surfaces. A [`Statsy`] bound to a
//! browser context forwards events to the page's command channel; one bound
//! to a server dispatcher posts beacons directly. Framework adapters only
//! ever talk to this type.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use statsy::{BrowserContext, InjectionConfig, Statsy, TrackEventOptions};
//!
//! # async fn run() -> statsy::Result<()> {
//! let page = Arc::new(BrowserContext::headless());
//! let statsy = Statsy::browser(Arc::clone(&page));
//!
//! statsy.inject(&InjectionConfig::new("YOUR_SITE_ID"))?;
//! statsy
//!     .track_event(TrackEventOptions::new("contact-form").prop("label", "Contact Us"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod tracker;

pub use error::{Error, Result};
pub use tracker::{Runtime, Statsy, TrackEventOptions, Tracked};

pub use statsy_beacon::{
    BeaconConfig, BeaconError, CredentialChain, DispatchOutcome, HttpTransport, ServerDispatcher,
    StaticResolver, DEFAULT_ENDPOINT,
};
pub use statsy_inject::{
    render_head_tags, BrowserContext, Document, InjectError, InjectOutcome, PathFilter, RuntimeMode,
    ScriptInjector,
};
pub use statsy_queue::{ClientDispatcher, DispatchPort, QueuedCommand};
pub use statsy_types::{Event, Headers, InjectionConfig, PropValue, Props, RequestContext};
