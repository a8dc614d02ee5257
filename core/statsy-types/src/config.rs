//! Injection configuration supplied by framework adapters.

use crate::{EventMiddleware, SharedMiddleware};

/// Domain that serves tracking scripts when none is configured.
pub const DEFAULT_TRACKING_DOMAIN: &str = "statsy.observer";

/// Options for loading the tracking script into a page.
#[derive(Debug, Clone)]
pub struct InjectionConfig {
    /// The Statsy site ID. Required.
    pub site_id: String,
    /// Self-hosted tracking domain, with or without a scheme.
    pub tracking_endpoint_domain: Option<String>,
    /// Transform applied by the tracking script to every event.
    pub event_middleware: Option<SharedMiddleware>,
    /// Whether the tracking script records pageviews on its own.
    pub auto_track_pageviews: bool,
}

impl InjectionConfig {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            tracking_endpoint_domain: None,
            event_middleware: None,
            auto_track_pageviews: true,
        }
    }

    #[must_use]
    pub fn with_tracking_domain(mut self, domain: impl Into<String>) -> Self {
        self.tracking_endpoint_domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn with_event_middleware(mut self, middleware: impl EventMiddleware + 'static) -> Self {
        self.event_middleware = Some(SharedMiddleware::new(middleware));
        self
    }

    #[must_use]
    pub fn with_auto_track_pageviews(mut self, enabled: bool) -> Self {
        self.auto_track_pageviews = enabled;
        self
    }

    /// The tracking domain with any leading `http://` or `https://` removed.
    pub fn tracking_domain(&self) -> &str {
        let domain = self
            .tracking_endpoint_domain
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_TRACKING_DOMAIN);

        domain
            .strip_prefix("https://")
            .or_else(|| domain.strip_prefix("http://"))
            .unwrap_or(domain)
    }

    /// The origin scripts are loaded from, e.g. `https://statsy.observer`.
    pub fn origin(&self) -> String {
        format!("https://{}", self.tracking_domain())
    }

    /// The tenant script URL: `https://{domain}/{site_id}.js`.
    pub fn script_url(&self) -> String {
        format!("{}/{}.js", self.origin(), self.site_id)
    }
}
