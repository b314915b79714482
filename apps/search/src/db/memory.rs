//! In-memory executor over a [`Dataset`].

use super::{nest, object, value_json, PagedQueryExecutor};
use crate::Result;
use async_trait::async_trait;
use catalog_query::{Dataset, JoinPath, PageRequest, Record, SearchQuery};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Default)]
pub struct MemoryExecutor {
    data: Dataset,
}

impl MemoryExecutor {
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }
}

#[async_trait]
impl PagedQueryExecutor for MemoryExecutor {
    async fn fetch_page<J: JoinPath>(
        &self,
        query: &SearchQuery<J>,
        page: &PageRequest,
    ) -> Result<Vec<JsonValue>> {
        let rows = self
            .data
            .page(query, page.offset(), u64::from(page.page_size))
            .into_iter()
            .map(|record| render(query, record))
            .collect();
        Ok(rows)
    }

    async fn count<J: JoinPath>(&self, query: &SearchQuery<J>) -> Result<u64> {
        Ok(self.data.count(query))
    }
}

fn record_json(record: &Record) -> JsonValue {
    object(
        record
            .fields()
            .map(|(name, value)| (name.to_string(), value_json(value))),
    )
}

/// The root row with each fetched relationship nested, as Postgres returns it.
fn render<J: JoinPath>(query: &SearchQuery<J>, record: &Record) -> JsonValue {
    let mut row = record_json(record);
    for join in query.fetches() {
        let related = follow(record, join.path).map_or(JsonValue::Null, record_json);
        nest(&mut row, join.path.path(), related);
    }
    row
}

/// The single record reached from `root` along a to-one `path`.
fn follow<J: JoinPath>(root: &Record, path: J) -> Option<&Record> {
    let mut chain = vec![path];
    while let Some(parent) = chain.last().and_then(|p| p.parent()) {
        chain.push(parent);
    }
    chain
        .into_iter()
        .rev()
        .try_fold(root, |current, hop| current.related(hop.relation().name).first())
}
