
pub use builders::*;
pub use fixtures::*;

use catalog_query::{Dataset, Page, PageRequest, Specification};
use catalog_search::caller::{OrganizationRole, UserRole};
use catalog_search::config::SearchConfig;
use catalog_search::db::MemoryExecutor;
use catalog_search::search::SearchContext;
use catalog_search::{CallerContext, SearchService};
use chrono::NaiveDate;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Date every relative filter in the suites is computed against.
pub fn as_of() -> NaiveDate {
    date(2024, 6, 1)
}

pub fn service() -> SearchService<MemoryExecutor> {
    service_over(catalog())
}

pub fn service_over(data: Dataset) -> SearchService<MemoryExecutor> {
    let config = SearchConfig {
        english_language_id: Some(ENGLISH),
        ..SearchConfig::default()
    };
    SearchService::new(Arc::new(MemoryExecutor::new(data)), config)
}

/// Ada, admin at the source partner "Hope Partners".
pub fn admin() -> CallerContext {
    CallerContext::new(1, 1, OrganizationRole::SourcePartner).with_role(UserRole::Admin)
}

/// Sam, partner admin at the job creator "Acme Hiring".
pub fn job_creator() -> CallerContext {
    CallerContext::new(2, 2, OrganizationRole::JobCreator).with_role(UserRole::PartnerAdmin)
}

pub fn context(caller: &CallerContext) -> SearchContext<'_> {
    SearchContext::new(caller, as_of()).with_english_language(Some(ENGLISH))
}

/// A page large enough for every fixture table.
pub fn everything() -> PageRequest {
    PageRequest::new(0, 100)
}

pub fn ids(page: &Page<JsonValue>) -> Vec<i64> {
    page.rows.iter().filter_map(|row| row["id"].as_i64()).collect()
}

/// Ids of every row `spec` matches, in query order. Also checks that the
/// count query agrees with the rows.
pub async fn matching<S: Specification>(
    service: &SearchService<MemoryExecutor>,
    spec: &S,
) -> anyhow::Result<Vec<i64>> {
    let page = service.search(spec, &everything()).await?;
    assert_eq!(
        page.total,
        page.rows.len() as u64,
        "count disagrees with rows for {}",
        spec.entity().name
    );
    Ok(ids(&page))
}
