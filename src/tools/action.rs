//! Action dispatch
//!
//! Maps a caller-selected action name plus optional payload onto the
//! corresponding [`ResourceClient`] call. Unknown actions and incomplete
//! payloads fail here, before any network traffic.

use serde_json::Value;

use crate::api::resource::ResourceClient;
use crate::config::Config;
use crate::error::{Error, Result};

/// Verb a caller selects on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Read,
    Create,
    Update,
    Delete,
    InstallerUrls,
}

/// The five CRUD actions every resource supports.
pub(crate) const CRUD_ACTIONS: &[Action] = &[
    Action::List,
    Action::Read,
    Action::Create,
    Action::Update,
    Action::Delete,
];

impl Action {
    /// Wire name of the action.
    pub fn name(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::InstallerUrls => "installer_urls",
        }
    }

    /// Parse an action name against a resource's allowed set.
    pub(crate) fn parse(resource: &'static str, name: &str, allowed: &[Action]) -> Result<Self> {
        allowed
            .iter()
            .copied()
            .find(|action| action.name() == name)
            .ok_or_else(|| Error::InvalidAction {
                resource,
                action: name.to_string(),
            })
    }
}

/// Dispatch one CRUD action against the collection at `prefix`.
///
/// A missing payload defaults to `{}`. `list` ignores the payload entirely;
/// the mutating actions forward it verbatim (wrapped in the API's
/// one-element-list convention by the client).
pub(crate) async fn dispatch(
    config: &Config,
    resource: &'static str,
    prefix: &'static str,
    create_required: &[&'static str],
    action: Action,
    payload: Option<Value>,
) -> Result<Value> {
    tracing::debug!("dispatch: resource={}, action={}", resource, action.name());

    let payload = payload.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
    let client = ResourceClient::new(config, prefix)?;

    match action {
        Action::List => client.list().await,
        Action::Read => {
            let id = id_segment("read", &payload)?;
            client.read(&id).await
        }
        Action::Create => {
            require_fields("create", &payload, create_required)?;
            client.create(&payload).await
        }
        Action::Update => {
            require_fields("update", &payload, &["id"])?;
            client.update(&payload).await
        }
        Action::Delete => {
            require_fields("delete", &payload, &["id"])?;
            client.delete(&payload).await
        }
        Action::InstallerUrls => Err(Error::InvalidAction {
            resource,
            action: Action::InstallerUrls.name().to_string(),
        }),
    }
}

/// Check that `payload` carries every field in `fields`.
fn require_fields(action: &'static str, payload: &Value, fields: &[&'static str]) -> Result<()> {
    for field in fields {
        match payload.get(field) {
            Some(value) if !value.is_null() => {}
            _ => return Err(Error::MissingField { action, field }),
        }
    }
    Ok(())
}

/// Extract the `id` field as a URL path segment.
fn id_segment(action: &'static str, payload: &Value) -> Result<String> {
    match payload.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(Error::MissingField { action, field: "id" }),
    }
}
