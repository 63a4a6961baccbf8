//! Domain tools
//!
//! Manages domain and subdomain names on Opalstack. A domain must exist
//! before a site that uses it can be created.

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::tools::action::{dispatch, Action, CRUD_ACTIONS};

/// Tool facade for the `/domain` collection.
pub struct DomainTools {
    config: Config,
}

impl DomainTools {
    const RESOURCE: &'static str = "domain";
    const PREFIX: &'static str = "/domain";
    const CREATE_REQUIRED: &'static [&'static str] = &["name"];

    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build from the process environment (`OPALSTACK_API_TOKEN` plus the
    /// deployment flags).
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Dispatch one action.
    ///
    /// `create` requires `name` (the fully qualified domain name); `read`,
    /// `update` and `delete` require `id`.
    pub async fn handle(&self, action: &str, payload: Option<Value>) -> Result<Value> {
        let action = Action::parse(Self::RESOURCE, action, CRUD_ACTIONS)?;
        dispatch(
            &self.config,
            Self::RESOURCE,
            Self::PREFIX,
            Self::CREATE_REQUIRED,
            action,
            payload,
        )
        .await
    }
}
