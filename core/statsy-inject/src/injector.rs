//! Script injection.

use crate::document::{BrowserContext, ScriptElement};
use crate::error::{InjectError, InjectResult};
use crate::mode::RuntimeMode;
use statsy_queue::TrackerConfig;
use statsy_types::InjectionConfig;
use tracing::{debug, info};

/// What [`ScriptInjector::inject`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectOutcome {
    /// A script element was appended for `src`.
    Injected { src: String },
    /// A script for `src` was already in the head.
    AlreadyPresent { src: String },
    /// Not running in a browser (server-side rendering).
    SkippedNotBrowser,
    /// Running in development mode.
    SkippedDevelopment,
}

/// Loads the tenant tracking script into a page.
#[derive(Debug, Clone, Default)]
pub struct ScriptInjector {
    mode: RuntimeMode,
}

impl ScriptInjector {
    pub fn new(mode: RuntimeMode) -> Self {
        Self { mode }
    }

    /// An injector using [`RuntimeMode::from_env`].
    pub fn from_env() -> Self {
        Self::new(RuntimeMode::from_env())
    }

    pub fn mode(&self) -> &RuntimeMode {
        &self.mode
    }

    /// Injects the script described by `config` into `context`.
    ///
    /// `context` is `None` outside a browser. The middleware is registered
    /// before the script tag exists, so it sees every event the script sends.
    pub fn inject(
        &self,
        context: Option<&BrowserContext>,
        config: &InjectionConfig,
    ) -> InjectResult<InjectOutcome> {
        if config.site_id.trim().is_empty() {
            return Err(InjectError::MissingSiteId);
        }

        let Some(context) = context else {
            info!("Statsy Analytics: inject() disabled for SSR");
            return Ok(InjectOutcome::SkippedNotBrowser);
        };

        if self.mode.is_development() {
            info!("Statsy Analytics: Disabled for development");
            return Ok(InjectOutcome::SkippedDevelopment);
        }

        let globals = context.globals();
        globals.port().ensure_queue();

        if let Some(middleware) = &config.event_middleware {
            globals.dispatcher().register_middleware(middleware.clone());
        }

        globals.set_config(TrackerConfig {
            auto_track_pageviews: config.auto_track_pageviews,
        });

        let src = config.script_url();
        let mut document = context.document();
        if document.has_head_script_containing(&src) {
            debug!("Tracking script already present: {}", src);
            return Ok(InjectOutcome::AlreadyPresent { src });
        }

        document.append_head_script(ScriptElement::deferred(src.clone()));
        info!("Injected tracking script: {}", src);
        Ok(InjectOutcome::Injected { src })
    }
}
