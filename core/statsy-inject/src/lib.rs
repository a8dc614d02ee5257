//! Tracking script injection for Statsy.
//!
//! [`ScriptInjector`] loads `https://{domain}/{siteId}.js` into a page exactly
//! once, after installing the pre-load queue and registering the optional
//! event middleware. Pages are reached through the [`Document`] trait so the
//! injector can drive a real DOM binding or the in-memory [`HeadDocument`].
//!
//! Also provided:
//! - [`render_head_tags`] for server renderers that emit the script tag
//!   directly into HTML
//! - [`PathFilter`], a ready-made middleware that excludes paths and strips
//!   query parameters

mod document;
mod error;
mod filter;
mod head;
mod injector;
mod mode;

pub use document::{BrowserContext, Document, HeadDocument, ScriptElement};
pub use error::{InjectError, InjectResult};
pub use filter::PathFilter;
pub use head::render_head_tags;
pub use injector::{InjectOutcome, ScriptInjector};
pub use mode::{RuntimeMode, MODE_ENV_VARS};
