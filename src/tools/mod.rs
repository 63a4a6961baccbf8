//! Tool facades for the skill framework
//!
//! One module per Opalstack resource collection. Every facade exposes the
//! same surface - `handle(action, payload)` - so a skill framework can
//! register each one as a tool and forward the caller's action string plus
//! payload object unchanged.
//!
//! # Module Structure
//!
//! - [`action`] - Action enum, payload schema checks, shared CRUD dispatch
//! - [`app`] - Web applications (plus the installer catalogue action)
//! - [`domain`] - Domains and subdomains
//! - [`mariadb`] - MariaDB databases
//! - [`psqldb`] - PostgreSQL databases
//! - [`osuser`] - OS shell users

mod action;

pub mod app;
pub mod domain;
pub mod mariadb;
pub mod osuser;
pub mod psqldb;

pub use action::Action;
pub use app::ApplicationTools;
pub use domain::DomainTools;
pub use mariadb::MariaDbTools;
pub use osuser::OsUserTools;
pub use psqldb::PsqlDbTools;
