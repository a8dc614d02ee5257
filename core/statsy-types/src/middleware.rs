//! Event middleware capability.
//!
//! A middleware is a pure transform applied by the loaded tracking script to
//! every event before transmission. Returning `None` drops the event.

use crate::Event;
use std::fmt;
use std::sync::Arc;

/// A transform applied to each event before it is sent.
pub trait EventMiddleware: Send + Sync {
    /// Transforms `event`, or returns `None` to drop it.
    fn apply(&self, event: Event) -> Option<Event>;
}

impl<F> EventMiddleware for F
where
    F: Fn(Event) -> Option<Event> + Send + Sync,
{
    fn apply(&self, event: Event) -> Option<Event> {
        self(event)
    }
}

/// A middleware shared between the configuration and the command channel.
#[derive(Clone)]
pub struct SharedMiddleware(Arc<dyn EventMiddleware>);

impl SharedMiddleware {
    pub fn new(middleware: impl EventMiddleware + 'static) -> Self {
        Self(Arc::new(middleware))
    }

    /// Applies the wrapped middleware.
    pub fn apply(&self, event: Event) -> Option<Event> {
        self.0.apply(event)
    }

    /// Returns true if both handles point at the same middleware instance.
    pub fn ptr_eq(&self, other: &SharedMiddleware) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedMiddleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedMiddleware(..)")
    }
}
