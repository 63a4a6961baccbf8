//! Opalstack API interaction module
//!
//! Core functionality for talking to the Opalstack REST API: the
//! authenticated HTTP transport and the generic per-collection CRUD client.
//!
//! # Module Structure
//!
//! - [`transport`] - Authenticated JSON transport over HTTPS
//! - [`resource`] - Generic CRUD client parameterized by URL prefix
//!
//! # Example
//!
//! ```ignore
//! use crate::api::resource::ResourceClient;
//! use crate::config::Config;
//!
//! async fn example(config: &Config) -> crate::error::Result<()> {
//!     let domains = ResourceClient::new(config, "/domain")?;
//!     let all = domains.list().await?;
//!     Ok(())
//! }
//! ```

pub mod resource;
pub mod transport;
