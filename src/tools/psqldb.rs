//! PostgreSQL database tools
//!
//! Manages PostgreSQL databases on Opalstack. Same shape as the MariaDB
//! collection: databases live on a server, and access is granted by updating
//! the user lists.

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::tools::action::{dispatch, Action, CRUD_ACTIONS};

/// Tool facade for the `/psqldb` collection.
pub struct PsqlDbTools {
    config: Config,
}

impl PsqlDbTools {
    const RESOURCE: &'static str = "psqldb";
    const PREFIX: &'static str = "/psqldb";
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
