//! OS user tools
//!
//! Manages OS shell users on an Opalstack web server. Applications depend on
//! an OS user to run, so these are typically created first.

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::tools::action::{dispatch, Action, CRUD_ACTIONS};

/// Tool facade for the `/osuser` collection.
pub struct OsUserTools {
    config: Config,
}

impl OsUserTools {
    const RESOURCE: &'static str = "osuser";
    const PREFIX: &'static str = "/osuser";
    const CREATE_REQUIRED: &'static [&'static str] = &["name", "server"];

    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Dispatch one action. `create` requires `name` and `server`; `read`,
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
