//! Client-side event dispatch.

use crate::{DispatchPort, QueuedCommand};
use statsy_types::{Props, SharedMiddleware, PAGEVIEW};
use std::sync::Arc;
use tracing::debug;

/// Forwards named events to the handler installed on a [`DispatchPort`].
///
/// Dispatch is fire-and-forget: nothing is returned and downstream failures
/// are invisible here.
#[derive(Debug, Clone)]
pub struct ClientDispatcher {
    port: Arc<DispatchPort>,
}

impl ClientDispatcher {
    pub fn new(port: Arc<DispatchPort>) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &Arc<DispatchPort> {
        &self.port
    }

    /// Sends `(name, props)` to the installed handler.
    ///
    /// A no-op when nothing is installed yet; the queue bootstrap has to run
    /// first.
    pub fn dispatch(&self, name: &str, props: Option<Props>) {
        if !self.port.call(QueuedCommand::event(name, props)) {
            debug!("Dropped {} event: tracking is not initialized", name);
        }
    }

    pub fn dispatch_pageview(&self) {
        self.dispatch(PAGEVIEW, None);
    }

    /// Registers an event middleware with the tracking script.
    pub fn register_middleware(&self, middleware: SharedMiddleware) {
        self.port.call(QueuedCommand::middleware(middleware));
    }
}
