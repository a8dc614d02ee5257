//! Path exclusion and query stripping middleware.

use crate::error::{InjectError, InjectResult};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use statsy_types::{Event, EventMiddleware};
use url::Url;

/// Drops pageviews for excluded paths and removes query parameters.
///
/// Exclude patterns are globs matched against the URL path; `*` does not
/// cross `/`, `**` does. Query parameters listed in `remove_query_params`
/// are removed from the `href` of every event.
#[derive(Debug, Clone)]
pub struct PathFilter {
    exclude: GlobSet,
    remove_query_params: Vec<String>,
}

impl PathFilter {
    pub fn new<P, Q>(exclude: P, remove_query_params: Q) -> InjectResult<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        Q: IntoIterator,
        Q::Item: Into<String>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| InjectError::InvalidGlob {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
        }

        let exclude = builder.build().map_err(|source| InjectError::InvalidGlob {
            pattern: String::new(),
            source,
        })?;

        Ok(Self {
            exclude,
            remove_query_params: remove_query_params.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns true if `path` matches an exclude pattern.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.is_match(path)
    }

    /// Removes the configured parameters. Returns true if `url` changed.
    fn strip_query(&self, url: &mut Url) -> bool {
        if self.remove_query_params.is_empty() || url.query().is_none() {
            return false;
        }

        let before = url.query_pairs().count();

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| !self.remove_query_params.iter().any(|p| p == name))
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        if kept.len() == before {
            return false;
        }

        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
        true
    }
}

impl EventMiddleware for PathFilter {
    fn apply(&self, mut event: Event) -> Option<Event> {
        // Events with an unparsable href pass through untouched.
        let Ok(mut url) = Url::parse(&event.href) else {
            return Some(event);
        };

        if event.is_pageview() && self.is_excluded(url.path()) {
            return None;
        }

        if self.strip_query(&mut url) {
            event.href = url.to_string();
        }
        Some(event)
    }
}
