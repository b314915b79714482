//! Search service.
//!
//! Assembles the row and count queries for one specification, runs both on
//! the executor and returns a [`Page`] of JSON rows.

use crate::caller::CallerContext;
use crate::config::SearchConfig;
use crate::db::PagedQueryExecutor;
use crate::models::{
    CandidateSearchRequest, JobSearchRequest, OpportunitySearchRequest, PartnerSearchRequest,
    ReferenceSearchRequest, SavedListSearchRequest, SavedSearchSearchRequest, UserSearchRequest,
};
use crate::schema::reference::ReferenceTable;
use crate::search::{
    CandidateSearch, JobSearch, OpportunitySearch, PartnerSearch, ReferenceSearch,
    SavedListSearch, SavedSearchSearch, SearchContext, UserSearch,
};
use crate::Result;
use catalog_query::sql::{count_sql, rows_sql};
use catalog_query::{
    assemble, Page, PageRequest, QueryMode, SortRequest, Specification, SqlQuery,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Instant;
use validator::Validate;

pub struct SearchService<E> {
    executor: Arc<E>,
    config: SearchConfig,
}

impl<E> Clone for SearchService<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            config: self.config.clone(),
        }
    }
}

impl<E: PagedQueryExecutor> SearchService<E> {
    pub fn new(executor: Arc<E>, config: SearchConfig) -> Self {
        Self { executor, config }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// First page with the configured default size.
    pub fn default_page(&self) -> PageRequest {
        PageRequest::new(0, self.config.default_page_size)
    }

    /// Build context for `caller` as of today.
    pub fn context<'a>(&self, caller: &'a CallerContext) -> SearchContext<'a> {
        SearchContext::today(caller).with_english_language(self.config.english_language_id)
    }

    /// Runs `spec` for one page.
    ///
    /// The count covers every matching row, independent of the page.
    pub async fn search<S: Specification>(
        &self,
        spec: &S,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        page.validate(self.config.max_page_size)?;
        let entity = spec.entity().name;

        let rows_query = assemble(spec, QueryMode::Rows, &page.sort())?;
        let count_query = assemble(spec, QueryMode::Count, &SortRequest::default())?;

        let started = Instant::now();
        let (rows, total) = tokio::try_join!(
            self.executor.fetch_page(&rows_query, page),
            self.executor.count(&count_query),
        )
        .map_err(|e| {
            tracing::error!(entity, error = %e, "search failed");
            e
        })?;

        tracing::debug!(
            entity,
            page = page.page_index,
            size = page.page_size,
            rows = rows.len(),
            total,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search completed"
        );

        Ok(Page {
            rows,
            total,
            page_index: page.page_index,
            page_size: page.page_size,
        })
    }

    /// Number of rows matching `spec`.
    pub async fn count<S: Specification>(&self, spec: &S) -> Result<u64> {
        let query = assemble(spec, QueryMode::Count, &SortRequest::default())?;
        self.executor.count(&query).await.map_err(|e| {
            tracing::error!(entity = spec.entity().name, error = %e, "count failed");
            e
        })
    }

    pub async fn search_candidates(
        &self,
        caller: &CallerContext,
        request: &CandidateSearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        let spec = CandidateSearch::new(request, self.context(caller));
        self.search(&spec, page).await
    }

    pub async fn search_jobs(
        &self,
        caller: &CallerContext,
        request: &JobSearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        let spec = JobSearch::new(request, self.context(caller));
        self.search(&spec, page).await
    }

    pub async fn search_opportunities(
        &self,
        caller: &CallerContext,
        request: &OpportunitySearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        let spec = OpportunitySearch::new(request, self.context(caller));
        self.search(&spec, page).await
    }

    pub async fn search_saved_searches(
        &self,
        caller: &CallerContext,
        request: &SavedSearchSearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        let spec = SavedSearchSearch::new(request, self.context(caller));
        self.search(&spec, page).await
    }

    pub async fn search_saved_lists(
        &self,
        caller: &CallerContext,
        request: &SavedListSearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        let spec = SavedListSearch::new(request, self.context(caller));
        self.search(&spec, page).await
    }

    pub async fn search_users(
        &self,
        caller: &CallerContext,
        request: &UserSearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        let spec = UserSearch::new(request, self.context(caller));
        self.search(&spec, page).await
    }

    pub async fn search_reference(
        &self,
        caller: &CallerContext,
        table: ReferenceTable,
        request: &ReferenceSearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        let spec = ReferenceSearch::new(table, request, self.context(caller));
        self.search(&spec, page).await
    }

    pub async fn search_partners(
        &self,
        request: &PartnerSearchRequest,
        page: &PageRequest,
    ) -> Result<Page<JsonValue>> {
        request.validate()?;
        self.search(&PartnerSearch::new(request), page).await
    }
}

/// Renders the row and count SQL `spec` would run for `page`.
pub fn explain<S: Specification>(spec: &S, page: &PageRequest) -> Result<(SqlQuery, SqlQuery)> {
    let rows = assemble(spec, QueryMode::Rows, &page.sort())?;
    let count = assemble(spec, QueryMode::Count, &SortRequest::default())?;
    Ok((
        rows_sql(&rows, u64::from(page.page_size), page.offset()),
        count_sql(&count),
    ))
}
