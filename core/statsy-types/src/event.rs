//! Analytics events.
//!
//! An event is created at the call site, handed to exactly one dispatcher
//! and then discarded. Built-in categories (pageviews, web vitals, request
//! timings) are recognised by name; every other name is a custom event.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Event name used for pageviews.
pub const PAGEVIEW: &str = "pageview";

/// A primitive property value attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Event properties, ordered by key so serialized payloads are stable.
pub type Props = BTreeMap<String, PropValue>;

/// Core web vital metric names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebVital {
    Fid,
    Lcp,
    Cls,
    Fcp,
    Ttfb,
    Inp,
}

impl WebVital {
    /// The wire name of the metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            WebVital::Fid => "FID",
            WebVital::Lcp => "LCP",
            WebVital::Cls => "CLS",
            WebVital::Fcp => "FCP",
            WebVital::Ttfb => "TTFB",
            WebVital::Inp => "INP",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "FID" => Some(WebVital::Fid),
            "LCP" => Some(WebVital::Lcp),
            "CLS" => Some(WebVital::Cls),
            "FCP" => Some(WebVital::Fcp),
            "TTFB" => Some(WebVital::Ttfb),
            "INP" => Some(WebVital::Inp),
            _ => None,
        }
    }
}

/// The category an event name falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Pageview,
    WebVital(WebVital),
    /// `resource` or `navigation` timing entries.
    Request,
    Custom,
}

impl EventCategory {
    /// Classifies an event name. Matching is exact and case-sensitive.
    pub fn of(name: &str) -> Self {
        if name == PAGEVIEW {
            return EventCategory::Pageview;
        }
        if let Some(vital) = WebVital::from_name(name) {
            return EventCategory::WebVital(vital);
        }
        match name {
            "resource" | "navigation" => EventCategory::Request,
            _ => EventCategory::Custom,
        }
    }
}

/// An analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name (`pageview`, a web vital, `resource`/`navigation`, or custom).
    pub name: String,

    /// The page URL the event belongs to.
    pub href: String,

    /// Optional primitive properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
}

impl Event {
    /// Creates an event without properties.
    #[must_use]
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            props: None,
        }
    }

    /// Creates a pageview event for `href`.
    #[must_use]
    pub fn pageview(href: impl Into<String>) -> Self {
        Self::new(PAGEVIEW, href)
    }

    /// Adds a property, creating the property map on first use.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props
            .get_or_insert_with(Props::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replaces the property map.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn category(&self) -> EventCategory {
        EventCategory::of(&self.name)
    }

    pub fn is_pageview(&self) -> bool {
        self.category() == EventCategory::Pageview
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.href)
    }
}
