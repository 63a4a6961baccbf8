//! Error types for the Opalstack API client.
//!
//! Every failure in this crate maps onto one of these variants so that a
//! caller can branch on the category without parsing message strings. Nothing
//! here is retried locally; errors propagate to the caller unchanged.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is absent. Raised before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The action name is not in the resource's enumerated set. No network
    /// call is made.
    #[error("unknown action {action:?} for resource {resource:?}")]
    InvalidAction {
        resource: &'static str,
        action: String,
    },

    /// The payload is missing a field the action requires. No network call
    /// is made.
    #[error("payload for {action:?} is missing required field {field:?}")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },

    /// The API answered outside the 2xx range. `body` is the decoded JSON
    /// error payload, or the raw response text when it is not JSON.
    #[error("API request failed: {status}")]
    Remote { status: u16, body: Value },

    /// The API answered 2xx but the body is not valid JSON.
    #[error("invalid response body: {0}")]
    Protocol(String),

    /// The request never produced a response (connect, TLS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status of a remote rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
