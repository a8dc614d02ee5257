//! Dual-mode tracking.

use crate::error::Result;
use statsy_beacon::{BeaconConfig, DispatchOutcome, HttpTransport, ServerDispatcher};
use statsy_inject::{BrowserContext, InjectOutcome, ScriptInjector};
use statsy_types::{InjectionConfig, PropValue, Props, RequestContext};
use std::sync::Arc;
use tracing::debug;

/// Where tracking calls are routed.
#[derive(Debug, Clone)]
pub enum Runtime {
    /// Running in a page: events go through its command channel.
    Browser(Arc<BrowserContext>),
    /// No page: events are posted as beacons.
    Server(ServerDispatcher),
}

/// How a tracking call was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tracked {
    /// Handed to the page's command channel.
    Forwarded,
    /// Handled by the server dispatcher.
    Server(DispatchOutcome),
}

/// Options for [`Statsy::track_event`].
#[derive(Debug, Clone, Default)]
pub struct TrackEventOptions {
    pub name: String,
    pub props: Option<Props>,
    /// The inbound request. Only used on the server.
    pub request: Option<RequestContext>,
}

impl TrackEventOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props
            .get_or_insert_with(Props::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    #[must_use]
    pub fn request(mut self, request: RequestContext) -> Self {
        self.request = Some(request);
        self
    }
}

/// The SDK entry point used by framework adapters.
#[derive(Debug, Clone)]
pub struct Statsy {
    runtime: Runtime,
    injector: ScriptInjector,
}

impl Statsy {
    pub fn new(runtime: Runtime, injector: ScriptInjector) -> Self {
        Self { runtime, injector }
    }

    /// Browser tracking for `context`; the runtime mode comes from the
    /// environment.
    pub fn browser(context: Arc<BrowserContext>) -> Self {
        Self::new(Runtime::Browser(context), ScriptInjector::from_env())
    }

    pub fn server(dispatcher: ServerDispatcher) -> Self {
        Self::new(Runtime::Server(dispatcher), ScriptInjector::from_env())
    }

    /// Server tracking against `config` with the default credential chain.
    pub fn server_with_config(config: BeaconConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::server(ServerDispatcher::new(transport)))
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn is_browser(&self) -> bool {
        matches!(self.runtime, Runtime::Browser(_))
    }

    /// Loads the tracking script. A no-op outside the browser.
    pub fn inject(&self, config: &InjectionConfig) -> Result<InjectOutcome> {
        let context = match &self.runtime {
            Runtime::Browser(context) => Some(context.as_ref()),
            Runtime::Server(_) => None,
        };
        Ok(self.injector.inject(context, config)?)
    }

    /// Tracks a pageview. `request` is required on the server and ignored in
    /// the browser.
    pub async fn track_pageview(&self, request: Option<&RequestContext>) -> Result<Tracked> {
        match &self.runtime {
            Runtime::Browser(context) => {
                context.globals().dispatcher().dispatch_pageview();
                Ok(Tracked::Forwarded)
            }
            Runtime::Server(dispatcher) => {
                Ok(Tracked::Server(dispatcher.dispatch_pageview(request).await?))
            }
        }
    }

    /// Tracks a custom event.
    pub async fn track_event(&self, options: TrackEventOptions) -> Result<Tracked> {
        let TrackEventOptions {
            name,
            props,
            request,
        } = options;

        match &self.runtime {
            Runtime::Browser(context) => {
                if request.is_some() {
                    debug!("Ignoring request context for browser event {}", name);
                }
                context.globals().dispatcher().dispatch(&name, props);
                Ok(Tracked::Forwarded)
            }
            Runtime::Server(dispatcher) => {
                let outcome = dispatcher.dispatch(request.as_ref(), &name, props).await?;
                Ok(Tracked::Server(outcome))
            }
        }
    }
}
