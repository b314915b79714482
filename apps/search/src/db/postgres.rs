//! Postgres executor.

use super::{nest, PagedQueryExecutor};
use crate::config::DatabaseConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use catalog_query::sql::{count_sql, rows_sql, ROW_COLUMN};
use catalog_query::{BindValue, JoinPath, PageRequest, SearchQuery};
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::{Arguments, PgPool, Row};
use std::time::Duration;

#[derive(Clone)]
pub struct PostgresExecutor {
    pool: PgPool,
}

impl PostgresExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| config::ConfigError::NotFound("database.url".into()))?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PagedQueryExecutor for PostgresExecutor {
    async fn fetch_page<J: JoinPath>(
        &self,
        query: &SearchQuery<J>,
        page: &PageRequest,
    ) -> Result<Vec<JsonValue>> {
        let rendered = rows_sql(query, u64::from(page.page_size), page.offset());
        tracing::trace!(sql = %rendered.sql, binds = rendered.binds.len(), "fetching page");

        let statement = sqlx::query_with(&rendered.sql, arguments(rendered.binds)?);
        let rows = statement.fetch_all(&self.pool).await?;

        let fetches: Vec<&'static str> = query.fetches().map(|j| j.path.path()).collect();
        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut json: JsonValue = row.try_get(ROW_COLUMN)?;
            if !json.is_object() {
                return Err(Error::InvalidRow(format!(
                    "{} row is not a JSON object",
                    query.entity().name
                )));
            }
            for path in &fetches {
                let related: Option<JsonValue> = row.try_get(*path)?;
                nest(&mut json, path, related.unwrap_or(JsonValue::Null));
            }
            out.push(json);
        }
        Ok(out)
    }

    async fn count<J: JoinPath>(&self, query: &SearchQuery<J>) -> Result<u64> {
        let rendered = count_sql(query);
        tracing::trace!(sql = %rendered.sql, binds = rendered.binds.len(), "counting");

        let statement =
            sqlx::query_scalar_with::<_, i64, _>(&rendered.sql, arguments(rendered.binds)?);
        let total = statement.fetch_one(&self.pool).await?;
        u64::try_from(total).map_err(|_| Error::InvalidRow(format!("negative count {total}")))
    }
}

/// Encodes rendered bind values in placeholder order.
fn arguments(binds: Vec<BindValue>) -> Result<PgArguments> {
    let mut args = PgArguments::default();
    for value in binds {
        match value {
            BindValue::Bool(v) => args.add(v),
            BindValue::Int(v) => args.add(v),
            BindValue::Text(v) => args.add(v),
            BindValue::Date(v) => args.add(v),
            BindValue::Timestamp(v) => args.add(v),
            BindValue::IntArray(vs) => args.add(vs),
            BindValue::TextArray(vs) => args.add(vs),
        }
        .map_err(sqlx::Error::Encode)?;
    }
    Ok(args)
}
