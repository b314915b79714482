//! Storage seam for assembled search queries.

use crate::Result;
use async_trait::async_trait;
use catalog_query::{JoinPath, PageRequest, SearchQuery};
use serde_json::Value as JsonValue;

/// Runs assembled queries and returns rows as JSON objects.
///
/// Each row is the root record's columns, with every fetched relationship
/// nested under its relation name (`user.partner` lands in
/// `row["user"]["partner"]`).
#[async_trait]
pub trait PagedQueryExecutor: Send + Sync {
    /// One page of a [`catalog_query::QueryMode::Rows`] query, in query order.
    async fn fetch_page<J: JoinPath>(
        &self,
        query: &SearchQuery<J>,
        page: &PageRequest,
    ) -> Result<Vec<JsonValue>>;

    /// Number of distinct root rows matching a count query.
    async fn count<J: JoinPath>(&self, query: &SearchQuery<J>) -> Result<u64>;
}
