//! Credential resolution.
//!
//! Hosting runtimes expose secrets differently: a process environment
//! variable, a mounted secret file, or bindings handed to the handler. Each
//! mechanism is a [`CredentialResolver`]; a [`CredentialChain`] tries them in
//! order and the first non-empty token wins. Tokens are resolved on every
//! call and never cached.

use crate::error::{BeaconError, BeaconResult};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "STATSY_API_KEY";
/// Environment variable holding the path of a file containing the API key.
pub const API_KEY_FILE_ENV: &str = "STATSY_API_KEY_FILE";

/// A bearer token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, trimming surrounding whitespace. Empty tokens yield `None`.
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let token = token.as_ref().trim();
        (!token.is_empty()).then(|| Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// One way of obtaining the API key.
pub trait CredentialResolver: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the token if this mechanism is available and yields one.
    fn resolve(&self) -> Option<Credential>;
}

/// Reads a process environment variable.
#[derive(Debug, Clone)]
pub struct EnvVarResolver {
    var: String,
}

impl EnvVarResolver {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvVarResolver {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl CredentialResolver for EnvVarResolver {
    fn name(&self) -> &'static str {
        "env"
    }

    fn resolve(&self) -> Option<Credential> {
        std::env::var(&self.var).ok().and_then(Credential::new)
    }
}

/// Reads the token from a file whose path is given by an environment
/// variable (mounted secrets).
#[derive(Debug, Clone)]
pub struct SecretFileResolver {
    path_var: String,
}

impl SecretFileResolver {
    pub fn new(path_var: impl Into<String>) -> Self {
        Self {
            path_var: path_var.into(),
        }
    }
}

impl Default for SecretFileResolver {
    fn default() -> Self {
        Self::new(API_KEY_FILE_ENV)
    }
}

impl CredentialResolver for SecretFileResolver {
    fn name(&self) -> &'static str {
        "secret-file"
    }

    fn resolve(&self) -> Option<Credential> {
        let path = PathBuf::from(std::env::var_os(&self.path_var)?);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Credential::new(contents),
            Err(e) => {
                debug!("Could not read secret file {:?}: {}", path, e);
                None
            }
        }
    }
}

/// A token handed over explicitly, e.g. from per-request bindings.
#[derive(Clone)]
pub struct StaticResolver(Option<Credential>);

impl StaticResolver {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Credential::new(token))
    }
}

impl fmt::Debug for StaticResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticResolver").field(&self.0).finish()
    }
}

impl CredentialResolver for StaticResolver {
    fn name(&self) -> &'static str {
        "static"
    }

    fn resolve(&self) -> Option<Credential> {
        self.0.clone()
    }
}

/// Resolvers tried in priority order.
pub struct CredentialChain {
    resolvers: Vec<Box<dyn CredentialResolver>>,
}

impl CredentialChain {
    /// A chain with no resolvers; always fails.
    pub fn empty() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Appends a resolver with the lowest priority so far.
    #[must_use]
    pub fn with(mut self, resolver: impl CredentialResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Inserts a resolver ahead of all others.
    #[must_use]
    pub fn with_first(mut self, resolver: impl CredentialResolver + 'static) -> Self {
        self.resolvers.insert(0, Box::new(resolver));
        self
    }

    /// Names of the resolvers in priority order.
    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Returns the first token any resolver yields.
    pub fn resolve(&self) -> BeaconResult<Credential> {
        for resolver in &self.resolvers {
            if let Some(credential) = resolver.resolve() {
                debug!("Resolved API key via {}", resolver.name());
                return Ok(credential);
            }
        }
        Err(BeaconError::MissingCredential {
            tried: self.names(),
        })
    }
}

impl Default for CredentialChain {
    /// `STATSY_API_KEY`, then the file named by `STATSY_API_KEY_FILE`.
    fn default() -> Self {
        Self::empty()
            .with(EnvVarResolver::default())
            .with(SecretFileResolver::default())
    }
}

impl fmt::Debug for CredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialChain")
            .field("resolvers", &self.names())
            .finish()
    }
}
