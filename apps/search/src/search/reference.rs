//! Reference data and partner search.

use super::SearchContext;
use crate::models::enums::stored_values;
use crate::models::{PartnerSearchRequest, ReferenceSearchRequest};
use crate::schema::reference::{ReferenceTable, PARTNER};
use catalog_query::restriction::default_scope;
use catalog_query::terms;
use catalog_query::{Condition, EntityDef, Field, NoJoin, QueryScope, Result, Specification};

const NAME: &[Field<NoJoin>] = &[Field::root("name")];

/// Keyword and status search over one reference table.
pub struct ReferenceSearch<'a> {
    table: ReferenceTable,
    request: &'a ReferenceSearchRequest,
    context: SearchContext<'a>,
}

impl<'a> ReferenceSearch<'a> {
    pub fn new(
        table: ReferenceTable,
        request: &'a ReferenceSearchRequest,
        context: SearchContext<'a>,
    ) -> Self {
        Self {
            table,
            request,
            context,
        }
    }
}

impl Specification for ReferenceSearch<'_> {
    type Path = NoJoin;

    fn entity(&self) -> &'static EntityDef {
        self.table.entity()
    }

    fn condition(&self, scope: &mut QueryScope<NoJoin>) -> Result<Condition> {
        let r = self.request;
        let keyword = terms::keyword(scope, r.keyword.as_deref(), NAME, &[]);
        let statuses = terms::in_set(scope, Field::root("status"), stored_values(&r.statuses), None);

        // Restricted country lists only offer the caller's permitted countries.
        let permitted = match (self.table, r.restricted) {
            (ReferenceTable::Country, Some(true)) => default_scope(
                scope,
                Field::root("id"),
                &[],
                &self.context.caller.permitted_countries,
            ),
            _ => None,
        };

        Ok(Condition::True
            .and_opt(keyword)
            .and_opt(statuses)
            .and_opt(permitted))
    }
}

pub struct PartnerSearch<'a> {
    request: &'a PartnerSearchRequest,
}

impl<'a> PartnerSearch<'a> {
    pub fn new(request: &'a PartnerSearchRequest) -> Self {
        Self { request }
    }
}

impl Specification for PartnerSearch<'_> {
    type Path = NoJoin;

    fn entity(&self) -> &'static EntityDef {
        &PARTNER
    }

    fn condition(&self, scope: &mut QueryScope<NoJoin>) -> Result<Condition> {
        let r = self.request;
        let keyword = terms::keyword(
            scope,
            r.keyword.as_deref(),
            &[Field::root("name"), Field::root("abbreviation")],
            &[],
        );
        let statuses = terms::in_set(scope, Field::root("status"), stored_values(&r.statuses), None);
        let source = terms::flag(scope, Field::root("source_partner"), r.source_partner);
        let creator = terms::flag(scope, Field::root("job_creator"), r.job_creator);

        Ok(Condition::True
            .and_opt(keyword)
            .and_opt(statuses)
            .and_opt(source)
            .and_opt(creator))
    }
}
