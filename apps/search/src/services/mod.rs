//! Service layer - search orchestration

pub mod search;

pub use search::{explain, SearchService};
