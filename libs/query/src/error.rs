//! Error types for query building

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown sort field '{field}' for {entity}")]
    UnknownSortField { entity: &'static str, field: String },

    #[error("Sort field '{field}' traverses the to-many relation '{relation}'")]
    UnsortablePath { field: String, relation: &'static str },

    #[error("Invalid page request: {0}")]
    InvalidPage(String),

    #[error("Missing search context: {0}")]
    MissingContext(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
