//! Saved search listing.

use super::SearchContext;
use crate::models::enums::{stored_values, StoredEnum};
use crate::models::{SavedSearchSearchRequest, Status};
use crate::schema::saved::{SavedSearchPath, SAVED_SEARCH, USER_SAVED_SEARCH};
use catalog_query::terms;
use catalog_query::{
    CompareOp, Condition, EntityDef, Field, Ownership, QueryScope, Result, Specification,
};

const KEYWORD_FIELDS: &[Field<SavedSearchPath>] = &[Field::root("name")];

const DISPLAY: &[SavedSearchPath] = &[SavedSearchPath::CreatedBy];

pub struct SavedSearchSearch<'a> {
    request: &'a SavedSearchSearchRequest,
    context: SearchContext<'a>,
}

impl<'a> SavedSearchSearch<'a> {
    pub fn new(request: &'a SavedSearchSearchRequest, context: SearchContext<'a>) -> Self {
        Self { request, context }
    }
}

impl Specification for SavedSearchSearch<'_> {
    type Path = SavedSearchPath;

    fn entity(&self) -> &'static EntityDef {
        &SAVED_SEARCH
    }

    fn fetches(&self) -> &'static [SavedSearchPath] {
        DISPLAY
    }

    fn condition(&self, scope: &mut QueryScope<SavedSearchPath>) -> Result<Condition> {
        let r = self.request;
        let caller = self.context.caller;

        // Deleted searches and each user's working default search never list.
        let live = Condition::compare(
            scope.column(Field::root("status")),
            CompareOp::Ne,
            Status::Deleted.as_str(),
        );
        let not_default = terms::flag(scope, Field::root("default_search"), Some(false));

        let keyword = terms::keyword(scope, r.keyword.as_deref(), KEYWORD_FIELDS, &[]);
        let search_type = terms::in_set(
            scope,
            Field::root("type"),
            stored_values(r.saved_search_type.as_slice()),
            None,
        );
        let fixed = terms::flag(scope, Field::root("fixed"), r.fixed);

        let mut ownership = Ownership::new();
        ownership
            .offer(r.owned, || {
                Condition::eq(scope.column(Field::root("created_by_id")), caller.user_id)
            })
            .offer(r.shared, || {
                Condition::in_subquery(
                    scope.primary_key(),
                    USER_SAVED_SEARCH.members_of(&[caller.user_id]),
                )
            })
            .offer(r.global, || {
                Condition::eq(scope.column(Field::root("global")), true)
            });

        let condition = live
            .and_opt(not_default)
            .and_opt(keyword)
            .and_opt(search_type)
            .and_opt(fixed);
        Ok(ownership.apply(condition))
    }
}
