//! Per-entity search specifications.
//!
//! Each specification borrows a filter request and the [`SearchContext`] and
//! implements [`catalog_query::Specification`], so the same value assembles
//! both the row query and the count query.

pub mod candidate;
pub mod job;
pub mod opportunity;
pub mod reference;
pub mod saved_list;
pub mod saved_search;
pub mod user;

pub use candidate::CandidateSearch;
pub use job::JobSearch;
pub use opportunity::OpportunitySearch;
pub use reference::{PartnerSearch, ReferenceSearch};
pub use saved_list::SavedListSearch;
pub use saved_search::SavedSearchSearch;
pub use user::UserSearch;

use crate::caller::CallerContext;
use catalog_query::Value;
use chrono::{Months, NaiveDate, NaiveTime, Utc};

/// Everything a build reads besides the filter request.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub caller: &'a CallerContext,
    /// Date that relative filters (age, overdue) are computed against.
    pub as_of: NaiveDate,
    pub english_language_id: Option<i64>,
}

impl<'a> SearchContext<'a> {
    pub fn new(caller: &'a CallerContext, as_of: NaiveDate) -> Self {
        Self {
            caller,
            as_of,
            english_language_id: None,
        }
    }

    pub fn today(caller: &'a CallerContext) -> Self {
        Self::new(caller, Utc::now().date_naive())
    }

    pub fn with_english_language(mut self, id: Option<i64>) -> Self {
        self.english_language_id = id;
        self
    }
}

/// Bounds for a timestamp column covering whole days `from..=to`.
pub(crate) fn day_bounds(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> (Option<Value>, Option<Value>) {
    let start = from.map(|d| Value::from(d.and_time(NaiveTime::MIN).and_utc()));
    let end = to
        .and_then(|d| d.and_hms_micro_opt(23, 59, 59, 999_999))
        .map(|t| Value::from(t.and_utc()));
    (start, end)
}

/// `date` moved back by whole years; `None` on calendar overflow.
pub(crate) fn years_before(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(years.checked_mul(12)?))
}
