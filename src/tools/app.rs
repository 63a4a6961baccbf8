//! Application tools
//!
//! Manages web applications on the Opalstack platform. Applications run as an
//! OS user, so an `osuser` UUID is required at create time.
//!
//! For installer-based apps the workflow is two steps: fetch the catalogue
//! with `installer_urls`, then create the app with the catalogue's exact
//! `app_type` and script URL for the target server's OS generation.

use serde_json::Value;

use crate::catalogue;
use crate::config::Config;
use crate::error::Result;
use crate::tools::action::{dispatch, Action};

/// Actions applications support: the CRUD set plus the catalogue.
const APP_ACTIONS: &[Action] = &[
    Action::List,
    Action::Read,
    Action::Create,
    Action::Update,
    Action::Delete,
    Action::InstallerUrls,
];

/// Tool facade for the `/app` collection.
pub struct ApplicationTools {
    config: Config,
}

impl ApplicationTools {
    const RESOURCE: &'static str = "app";
    const PREFIX: &'static str = "/app";
    const CREATE_REQUIRED: &'static [&'static str] = &["name", "osuser", "type"];

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
    /// `create` requires `name`, `osuser` and `type`; `read`, `update` and
    /// `delete` require `id`. `installer_urls` ignores the payload and
    /// answers from the static catalogue without a network call.
    pub async fn handle(&self, action: &str, payload: Option<Value>) -> Result<Value> {
        let action = Action::parse(Self::RESOURCE, action, APP_ACTIONS)?;

        if action == Action::InstallerUrls {
            return Ok(catalogue::installers_value().clone());
        }

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
