//! Runtime mode detection.

use std::env;

/// Environment variables consulted for the runtime mode, in priority order.
pub const MODE_ENV_VARS: [&str; 2] = ["STATSY_ENV", "NODE_ENV"];

/// The mode the host application runs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
    Test,
    Other(String),
}

impl RuntimeMode {
    /// Parses a mode name. Unknown names are kept as [`RuntimeMode::Other`].
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "development" => RuntimeMode::Development,
            "production" => RuntimeMode::Production,
            "test" => RuntimeMode::Test,
            other => RuntimeMode::Other(other.to_string()),
        }
    }

    /// Reads the first non-empty variable of [`MODE_ENV_VARS`].
    ///
    /// Defaults to production when none is set.
    pub fn from_env() -> Self {
        MODE_ENV_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeMode::Development)
    }
}
