//! Saved list listing.

use super::SearchContext;
use crate::models::enums::StoredEnum;
use crate::models::{SavedListSearchRequest, Status};
use crate::schema::saved::{SavedListPath, SAVED_LIST, USER_SAVED_LIST};
use catalog_query::terms;
use catalog_query::{
    CompareOp, Condition, EntityDef, Field, Ownership, QueryScope, Result, Specification,
};

const KEYWORD_FIELDS: &[Field<SavedListPath>] = &[Field::root("name")];

const DISPLAY: &[SavedListPath] = &[SavedListPath::CreatedBy, SavedListPath::SfJobOpp];

pub struct SavedListSearch<'a> {
    request: &'a SavedListSearchRequest,
    context: SearchContext<'a>,
}

impl<'a> SavedListSearch<'a> {
    pub fn new(request: &'a SavedListSearchRequest, context: SearchContext<'a>) -> Self {
        Self { request, context }
    }
}

impl Specification for SavedListSearch<'_> {
    type Path = SavedListPath;

    fn entity(&self) -> &'static EntityDef {
        &SAVED_LIST
    }

    fn fetches(&self) -> &'static [SavedListPath] {
        DISPLAY
    }

    fn condition(&self, scope: &mut QueryScope<SavedListPath>) -> Result<Condition> {
        let r = self.request;
        let caller = self.context.caller;

        let live = Condition::compare(
            scope.column(Field::root("status")),
            CompareOp::Ne,
            Status::Deleted.as_str(),
        );
        let keyword = terms::keyword(scope, r.keyword.as_deref(), KEYWORD_FIELDS, &[]);
        let fixed = terms::flag(scope, Field::root("fixed"), r.fixed);
        let registered = terms::flag(scope, Field::root("registered_job"), r.registered_job);

        let mut ownership = Ownership::new();
        ownership
            .offer(r.owned, || {
                Condition::eq(scope.column(Field::root("created_by_id")), caller.user_id)
            })
            .offer(r.shared, || {
                Condition::in_subquery(
                    scope.primary_key(),
                    USER_SAVED_LIST.members_of(&[caller.user_id]),
                )
            })
            .offer(r.global, || {
                Condition::eq(scope.column(Field::root("global")), true)
            });

        let condition = live
            .and_opt(keyword)
            .and_opt(fixed)
            .and_opt(registered);
        Ok(ownership.apply(condition))
    }
}
