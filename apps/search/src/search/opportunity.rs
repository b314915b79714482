//! Candidate opportunity search.

use super::SearchContext;
use crate::caller::OrganizationRole;
use crate::models::enums::stored_values;
use crate::models::{id_values, OpportunitySearchRequest};
use crate::schema::opportunity::{OpportunityPath, OPPORTUNITY};
use catalog_query::terms;
use catalog_query::{
    CompareOp, Condition, EntityDef, Field, Ownership, QueryScope, Result, Specification,
};

use OpportunityPath::*;

const KEYWORD_FIELDS: &[Field<OpportunityPath>] = &[
    Field::root("name"),
    Field::on(CandidateUser, "first_name"),
    Field::on(CandidateUser, "last_name"),
    Field::on(JobOpp, "name"),
];

const CANDIDATE_NUMBER: &[Field<OpportunityPath>] = &[Field::on(Candidate, "candidate_number")];

const DISPLAY: &[OpportunityPath] = &[Candidate, CandidateUser, JobOpp];

pub struct OpportunitySearch<'a> {
    request: &'a OpportunitySearchRequest,
    context: SearchContext<'a>,
}

impl<'a> OpportunitySearch<'a> {
    pub fn new(request: &'a OpportunitySearchRequest, context: SearchContext<'a>) -> Self {
        Self { request, context }
    }

    /// Job creators own opportunities on their jobs; source partners own the
    /// opportunities of their candidates.
    fn ownership(&self, scope: &mut QueryScope<OpportunityPath>) -> Option<Condition> {
        let r = self.request;
        let caller = self.context.caller;
        let (mine, org) = match caller.organization_role {
            OrganizationRole::JobCreator => (
                Field::on(JobOpp, "contact_user_id"),
                Field::on(JobOpp, "job_creator_id"),
            ),
            OrganizationRole::SourcePartner => (
                Field::root("created_by_id"),
                Field::on(CandidateUser, "partner_id"),
            ),
        };

        let mut ownership = Ownership::new();
        ownership
            .offer(r.owned_by_me, || {
                Condition::eq(scope.column(mine), caller.user_id)
            })
            .offer(r.owned_by_my_partner, || {
                Condition::eq(scope.column(org), caller.partner_id)
            });
        ownership.into_condition()
    }

    /// Overdue compares the next step's due date with the build date; an
    /// opportunity without a due date is never overdue.
    fn overdue(&self, scope: &mut QueryScope<OpportunityPath>) -> Option<Condition> {
        let overdue = self.request.overdue?;
        let due = scope.column(Field::root("next_step_due_date"));
        let today = self.context.as_of;
        if overdue {
            Some(Condition::compare(due, CompareOp::Lt, today))
        } else {
            Condition::any([
                Condition::compare(due, CompareOp::Ge, today),
                Condition::is_null(due),
            ])
        }
    }
}

impl Specification for OpportunitySearch<'_> {
    type Path = OpportunityPath;

    fn entity(&self) -> &'static EntityDef {
        &OPPORTUNITY
    }

    fn fetches(&self) -> &'static [OpportunityPath] {
        DISPLAY
    }

    fn condition(&self, scope: &mut QueryScope<OpportunityPath>) -> Result<Condition> {
        let r = self.request;

        let keyword = terms::keyword(scope, r.keyword.as_deref(), KEYWORD_FIELDS, CANDIDATE_NUMBER);
        let stages = terms::in_set(
            scope,
            Field::root("stage"),
            stored_values(&r.stages),
            r.stage_search_type,
        );
        let closed = terms::flag(scope, Field::root("closed"), r.sf_opp_closed);
        let jobs = terms::in_set(scope, Field::root("job_opp_id"), id_values(&r.job_ids), None);
        let candidates = terms::in_set(
            scope,
            Field::root("candidate_id"),
            id_values(&r.candidate_ids),
            None,
        );

        Ok(Condition::True
            .and_opt(keyword)
            .and_opt(stages)
            .and_opt(closed)
            .and_opt(jobs)
            .and_opt(candidates)
            .and_opt(self.overdue(scope))
            .and_opt(self.ownership(scope)))
    }
}
