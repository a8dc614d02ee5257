//! Inbound request context for server-side tracking.

use crate::{Error, Result};
use std::collections::BTreeMap;
use url::Url;

/// Case-insensitive header lookup.
///
/// Names are stored lowercased. [`Headers::insert`] replaces a value,
/// [`Headers::append`] joins repeated values with `", "` the way a Fetch
/// `Headers.get` does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any existing value for the same name.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.0.insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Adds a value for `name`, joining it to any existing value with `", "`.
    pub fn append(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        let value = value.as_ref();
        self.0
            .entry(name.as_ref().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Builder-style [`Headers::insert`].
    #[must_use]
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns the header value, or an empty string when absent.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Repeated names are joined with [`Headers::append`].
impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

/// The URL and headers of the request a server-side event is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub url: String,
    pub headers: Headers,
}

impl RequestContext {
    pub fn new(url: impl Into<String>, headers: Headers) -> Self {
        Self {
            url: url.into(),
            headers,
        }
    }

    /// Extracts the hostname from the request URL.
    pub fn hostname(&self) -> Result<String> {
        let parsed = Url::parse(&self.url)?;
        parsed
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| Error::MissingHostname(self.url.clone()))
    }

    /// Returns true if `Accept` or `Content-Type` names an HTML document.
    pub fn accepts_html(&self) -> bool {
        ["accept", "content-type"].iter().any(|name| {
            self.headers
                .get(name)
                .is_some_and(|value| value.contains("text/html"))
        })
    }
}
