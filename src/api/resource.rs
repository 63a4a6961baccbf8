//! Generic CRUD client for one Opalstack resource collection
//!
//! Every collection (`/app`, `/domain`, `/mariadb`, `/psqldb`, `/osuser`)
//! exposes the same five endpoints; a [`ResourceClient`] binds a transport to
//! one URL prefix and maps the endpoints onto methods. Records are opaque
//! JSON values owned by the remote side.

use serde_json::Value;

use crate::api::transport::Transport;
use crate::config::Config;
use crate::error::Result;

/// Typed facade over [`Transport`] for one resource collection.
#[derive(Clone)]
pub struct ResourceClient {
    http: Transport,
    prefix: &'static str,
}

impl ResourceClient {
    /// Create a client for the collection at `prefix`, e.g. `/domain`.
    pub fn new(config: &Config, prefix: &'static str) -> Result<Self> {
        Ok(Self {
            http: Transport::new(config)?,
            prefix,
        })
    }

    /// All records visible to the token.
    pub async fn list(&self) -> Result<Value> {
        self.http.get(&format!("{}/list/", self.prefix), None).await
    }

    /// One record by UUID. A missing id surfaces as the remote's non-2xx
    /// rejection.
    pub async fn read(&self, id: &str) -> Result<Value> {
        let path = format!("{}/read/{}", self.prefix, urlencoding::encode(id));
        self.http.get(&path, None).await
    }

    /// Create a single record. The API uses a bulk convention, so the record
    /// is posted as a one-element list.
    pub async fn create(&self, fields: &Value) -> Result<Value> {
        self.post_wrapped("create", fields).await
    }

    /// Update a record; `fields` must carry the `id`.
    pub async fn update(&self, fields: &Value) -> Result<Value> {
        self.post_wrapped("update", fields).await
    }

    /// Delete a record; `fields` must carry the `id`. Returns the
    /// remote-defined confirmation body.
    pub async fn delete(&self, fields: &Value) -> Result<Value> {
        self.post_wrapped("delete", fields).await
    }

    async fn post_wrapped(&self, verb: &str, fields: &Value) -> Result<Value> {
        let body = Value::Array(vec![fields.clone()]);
        self.http
            .post(&format!("{}/{}/", self.prefix, verb), Some(&body))
            .await
    }
}
