//! opalskill - Opalstack API tools for AI agents.
//!
//! Exposes the Opalstack hosting platform's REST API (applications, domains,
//! MariaDB and PostgreSQL databases, OS shell users) as uniform
//! action-dispatch tools. Each resource facade takes an action name plus an
//! optional JSON payload and performs exactly one HTTP round trip against the
//! platform API; the application facade additionally answers the static
//! one-click installer catalogue.
//!
//! # Architecture
//!
//! - [`config`] - Token and environment selection (production, staging,
//!   development)
//! - [`error`] - Error taxonomy shared by the whole crate
//! - [`api`] - Authenticated JSON transport and the generic CRUD client
//! - [`tools`] - One tool facade per resource collection
//! - [`catalogue`] - Embedded one-click installer metadata
//!
//! # Example
//!
//! ```no_run
//! use opalskill::DomainTools;
//! use serde_json::json;
//!
//! # async fn example() -> opalskill::Result<()> {
//! let domains = DomainTools::from_env()?;
//!
//! let all = domains.handle("list", None).await?;
//! let created = domains
//!     .handle("create", Some(json!({"name": "example.com"})))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod tools;

pub use config::{Config, Environment};
pub use error::{Error, Result};
pub use tools::{Action, ApplicationTools, DomainTools, MariaDbTools, OsUserTools, PsqlDbTools};
