//! MariaDB database tools
//!
//! Manages MariaDB databases on Opalstack. Databases live on a server, so a
//! `server` UUID is required at create time. Access is granted by updating
//! the database with `dbusers_readwrite` / `dbusers_readonly` user lists.

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::tools::action::{dispatch, Action, CRUD_ACTIONS};

/// Tool facade for the `/mariadb` collection.
pub struct MariaDbTools {
    config: Config,
}

impl MariaDbTools {
    const RESOURCE: &'static str = "mariadb";
    const PREFIX: &'static str = "/mariadb";
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
