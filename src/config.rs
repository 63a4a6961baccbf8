//! Configuration Management
//!
//! Credential and environment selection for the Opalstack API. There is no
//! on-disk state: the token and the deployment environment both come from
//! process environment variables, read once per [`Config`] construction.

use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "OPALSTACK_API_TOKEN";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Opalstack deployment environment.
///
/// Exactly one environment is effective per process; each maps to a fixed
/// API root URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Development,
}

impl Environment {
    /// API root URL for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://my.opalstack.com/api/v1",
            Environment::Staging => "https://my.opalstack.live/api/v1",
            Environment::Development => "https://my.opalstack.me/api/v1",
        }
    }

    /// Detect the environment from process flags.
    ///
    /// Checks `ENV_DEV`, then `ENV_STAGING`; if neither is set the result is
    /// production. First match wins when several flags are set. A flag counts
    /// as set when the variable exists and is non-empty.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| env::var(name).ok())
    }

    /// Detect the environment using an arbitrary variable lookup.
    pub fn from_env_with(get: impl Fn(&str) -> Option<String>) -> Self {
        let is_set = |name: &str| get(name).is_some_and(|v| !v.is_empty());

        if is_set("ENV_DEV") {
            Environment::Development
        } else if is_set("ENV_STAGING") {
            Environment::Staging
        } else {
            Environment::Production
        }
    }
}

/// Client configuration, passed by reference into every client construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token sent as `Authorization: Token <token>`.
    pub token: String,
    /// API root URL, e.g. `https://my.opalstack.com/api/v1`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Build a config for an explicit token and environment.
    pub fn new(token: impl Into<String>, environment: Environment) -> Self {
        Self {
            token: token.into(),
            base_url: environment.base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the token and environment flags from the process environment.
    ///
    /// The token is read fresh on every call and never cached across
    /// constructions. A missing or empty `OPALSTACK_API_TOKEN` fails with
    /// [`Error::Configuration`] before any network activity.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| env::var(name).ok())
    }

    /// Like [`Config::from_env`] but using an arbitrary variable lookup.
    pub fn from_env_with(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = get(TOKEN_VAR).unwrap_or_default();
        if token.is_empty() {
            return Err(Error::Configuration(format!("{TOKEN_VAR} env var not set")));
        }

        Ok(Self {
            token,
            base_url: Environment::from_env_with(get).base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Replace the API root URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
