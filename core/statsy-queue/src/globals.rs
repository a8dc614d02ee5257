//! Global-compatible view of a browser context.
//!
//! The tracking script reads three well-known globals: the dispatch function
//! (`statsy`), its backlog (`statsyq`) and a config object (`statsyConfig`).
//! [`BrowserGlobals`] holds the state behind those names for one page.

use crate::{ClientDispatcher, DispatchPort};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// Name of the global dispatch function.
pub const HANDLER_GLOBAL: &str = "statsy";
/// Name of the global pre-load backlog.
pub const BACKLOG_GLOBAL: &str = "statsyq";
/// Name of the global config object.
pub const CONFIG_GLOBAL: &str = "statsyConfig";

/// Config object read by the loaded tracking script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerConfig {
    pub auto_track_pageviews: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            auto_track_pageviews: true,
        }
    }
}

/// Per-page browser state: the dispatch port and the tracker config slot.
#[derive(Debug, Default)]
pub struct BrowserGlobals {
    port: Arc<DispatchPort>,
    config: RwLock<Option<TrackerConfig>>,
}

impl BrowserGlobals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn port(&self) -> &Arc<DispatchPort> {
        &self.port
    }

    /// A dispatcher bound to this context's port.
    pub fn dispatcher(&self) -> ClientDispatcher {
        ClientDispatcher::new(Arc::clone(&self.port))
    }

    pub fn set_config(&self, config: TrackerConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config);
    }

    /// The value of `statsyConfig`, if injection has set it.
    pub fn config(&self) -> Option<TrackerConfig> {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resets all globals (page unload).
    pub fn teardown(&self) {
        self.port.teardown();
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
