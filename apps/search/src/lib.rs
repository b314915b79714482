//! Catalog search backend
//!
//! Admin search over the candidate catalog:
//! - Filter request models for candidates, jobs, opportunities, saved
//!   searches and lists, users and reference data
//! - Per-entity schemas and specifications built on `catalog-query`
//! - Paged execution against Postgres or an in-memory dataset
//! - Configuration and logging for the `catalog-search` binary

pub mod caller;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod schema;
pub mod search;
pub mod services;

pub use caller::CallerContext;
pub use config::Config;
pub use error::{Error, Result};
pub use services::SearchService;
