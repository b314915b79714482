//! User search.

use super::SearchContext;
use crate::models::enums::stored_values;
use crate::models::UserSearchRequest;
use crate::schema::user::{UserPath, USERS};
use catalog_query::terms;
use catalog_query::{Condition, EntityDef, Field, QueryScope, Result, Specification};

const KEYWORD_FIELDS: &[Field<UserPath>] = &[
    Field::root("username"),
    Field::root("first_name"),
    Field::root("last_name"),
    Field::root("email"),
];

const DISPLAY: &[UserPath] = &[UserPath::Partner];

pub struct UserSearch<'a> {
    request: &'a UserSearchRequest,
    context: SearchContext<'a>,
}

impl<'a> UserSearch<'a> {
    pub fn new(request: &'a UserSearchRequest, context: SearchContext<'a>) -> Self {
        Self { request, context }
    }
}

impl Specification for UserSearch<'_> {
    type Path = UserPath;

    fn entity(&self) -> &'static EntityDef {
        &USERS
    }

    fn fetches(&self) -> &'static [UserPath] {
        DISPLAY
    }

    fn condition(&self, scope: &mut QueryScope<UserPath>) -> Result<Condition> {
        let r = self.request;
        let caller = self.context.caller;

        let keyword = terms::keyword(scope, r.keyword.as_deref(), KEYWORD_FIELDS, &[]);
        let roles = terms::in_set(scope, Field::root("role"), stored_values(&r.roles), None);
        let statuses = terms::in_set(scope, Field::root("status"), stored_values(&r.statuses), None);
        let partner = r
            .partner_id
            .map(|id| Condition::eq(scope.column(Field::root("partner_id")), id));

        // Below admin, callers only see users of their own organization.
        let visible = (!caller.role.sees_all_partners())
            .then(|| Condition::eq(scope.column(Field::root("partner_id")), caller.partner_id));

        Ok(Condition::True
            .and_opt(keyword)
            .and_opt(roles)
            .and_opt(statuses)
            .and_opt(partner)
            .and_opt(visible))
    }
}
