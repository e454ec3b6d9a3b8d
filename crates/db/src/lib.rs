//! `tiendaops-db` — hosted-database access.
//!
//! All persistent state lives in an external hosted database reached over
//! its REST data API (`/rest/v1/<table>`) and admin identity API
//! (`/auth/v1/admin/users`). This crate owns the two clients, the filter
//! query builder, and the row structs mirroring the hosted schema. Nothing
//! here retries or caches; callers decide what a failure means.

pub mod admin;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;
pub mod rows;

pub use admin::{AdminAuthClient, CreateUserOutcome};
pub use config::DbConfig;
pub use error::{DbError, DbResult};
pub use query::Query;
pub use rest::RestClient;
