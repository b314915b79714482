//! Job search.

use super::SearchContext;
use crate::caller::OrganizationRole;
use crate::models::enums::stored_values;
use crate::models::{id_values, JobSearchRequest};
use crate::schema::job::{JobPath, JOB, USER_STARRED_JOB};
use catalog_query::terms;
use catalog_query::{
    Condition, EntityDef, Field, Ownership, QueryScope, Result, Specification,
};

const KEYWORD_FIELDS: &[Field<JobPath>] = &[
    Field::root("name"),
    Field::on(JobPath::Employer, "name"),
];

const DISPLAY: &[JobPath] = &[JobPath::Country, JobPath::Employer, JobPath::JobCreator];

pub struct JobSearch<'a> {
    request: &'a JobSearchRequest,
    context: SearchContext<'a>,
}

impl<'a> JobSearch<'a> {
    pub fn new(request: &'a JobSearchRequest, context: SearchContext<'a>) -> Self {
        Self { request, context }
    }

    /// "Mine" and "my organization" alternatives, ORed.
    ///
    /// A job creator owns the jobs it posts and is their contact; a source
    /// partner owns the jobs its users created.
    fn ownership(&self, scope: &mut QueryScope<JobPath>) -> Option<Condition> {
        let r = self.request;
        let caller = self.context.caller;
        let (mine, org) = match caller.organization_role {
            OrganizationRole::JobCreator => (
                Field::root("contact_user_id"),
                Field::root("job_creator_id"),
            ),
            OrganizationRole::SourcePartner => (
                Field::root("created_by_id"),
                Field::on(JobPath::CreatedBy, "partner_id"),
            ),
        };

        let mut ownership = Ownership::new();
        ownership
            .offer(r.owned_by_me, || {
                Condition::eq(scope.column(mine), caller.user_id)
            })
            .offer(r.owned_by_my_partner, || {
                Condition::eq(scope.column(org), caller.partner_id)
            })
            .offer(r.starred_by_me, || {
                Condition::in_subquery(
                    scope.primary_key(),
                    USER_STARRED_JOB.members_of(&[caller.user_id]),
                )
            });
        ownership.into_condition()
    }
}

impl Specification for JobSearch<'_> {
    type Path = JobPath;

    fn entity(&self) -> &'static EntityDef {
        &JOB
    }

    fn fetches(&self) -> &'static [JobPath] {
        DISPLAY
    }

    fn condition(&self, scope: &mut QueryScope<JobPath>) -> Result<Condition> {
        let r = self.request;

        let keyword = terms::keyword(scope, r.keyword.as_deref(), KEYWORD_FIELDS, &[]);
        let stages = terms::in_set(
            scope,
            Field::root("stage"),
            stored_values(&r.stages),
            r.stage_search_type,
        );
        let destinations = terms::in_set(
            scope,
            Field::root("country_id"),
            id_values(&r.destination_ids),
            None,
        );
        let partners = terms::in_set(
            scope,
            Field::root("job_creator_id"),
            id_values(&r.partner_ids),
            None,
        );
        let closed = terms::flag(scope, Field::root("closed"), r.sf_opp_closed);
        let published = terms::presence(scope, Field::root("published_date"), r.published);

        Ok(Condition::True
            .and_opt(keyword)
            .and_opt(stages)
            .and_opt(destinations)
            .and_opt(partners)
            .and_opt(closed)
            .and_opt(published)
            .and_opt(self.ownership(scope)))
    }
}
