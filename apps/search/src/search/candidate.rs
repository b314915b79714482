//! Candidate search.

use super::{day_bounds, years_before, SearchContext};
use crate::models::enums::stored_values;
use crate::models::{id_values, CandidateSearchRequest};
use crate::schema::candidate::{
    CandidatePath, CANDIDATE, CANDIDATE_LANGUAGE, CANDIDATE_SAVED_LIST,
};
use catalog_query::membership::{membership, MembershipMode};
use catalog_query::restriction::default_scope;
use catalog_query::terms::{self, Unknowns};
use catalog_query::{
    Column, CompareOp, Condition, EntityDef, Error, Field, QueryScope, Result, Specification,
    Subquery,
};

use CandidatePath::*;

const KEYWORD_FIELDS: &[Field<CandidatePath>] = &[
    Field::on(User, "first_name"),
    Field::on(User, "last_name"),
    Field::on(User, "email"),
    Field::root("phone"),
    Field::root("whatsapp"),
    Field::root("additional_info"),
    Field::on(CandidateOccupationsOccupation, "name"),
];

const CANDIDATE_NUMBER: &[Field<CandidatePath>] = &[Field::root("candidate_number")];

const DISPLAY: &[CandidatePath] = &[User, UserPartner, Country, Nationality];

pub struct CandidateSearch<'a> {
    request: &'a CandidateSearchRequest,
    context: SearchContext<'a>,
}

impl<'a> CandidateSearch<'a> {
    pub fn new(request: &'a CandidateSearchRequest, context: SearchContext<'a>) -> Self {
        Self { request, context }
    }

    /// Age bounds on date of birth. Candidates without a birth date are kept.
    fn age(&self, scope: &mut QueryScope<CandidatePath>) -> Option<Condition> {
        let r = self.request;
        let as_of = self.context.as_of;
        let mut bounds = Vec::new();
        // At least min_age: born on or before as_of minus min_age years.
        if let Some(latest) = r.min_age.and_then(|age| years_before(as_of, age)) {
            bounds.push((CompareOp::Le, latest));
        }
        // At most max_age: born after as_of minus (max_age + 1) years.
        if let Some(earliest) = r
            .max_age
            .and_then(|age| years_before(as_of, age.saturating_add(1)))
        {
            bounds.push((CompareOp::Gt, earliest));
        }
        if bounds.is_empty() {
            return None;
        }

        let dob = scope.column(Field::root("dob"));
        let terms = bounds.into_iter().filter_map(|(cmp, date)| {
            Condition::any([Condition::compare(dob, cmp, date), Condition::is_null(dob)])
        });
        Some(Condition::all(terms))
    }

    fn languages(&self, scope: &QueryScope<CandidatePath>) -> Result<Condition> {
        let r = self.request;
        let mut condition = Condition::True;

        if r.english_min_spoken_level.is_some() || r.english_min_written_level.is_some() {
            let english = self
                .context
                .english_language_id
                .ok_or(Error::MissingContext("english language id"))?;
            condition = condition.and(proficiency(
                scope,
                english,
                r.english_min_spoken_level,
                r.english_min_written_level,
            ));
        }

        if let Some(language) = r.other_language_id {
            condition = condition.and(proficiency(
                scope,
                language,
                r.other_min_spoken_level,
                r.other_min_written_level,
            ));
        }
        Ok(condition)
    }

    fn saved_lists(&self, scope: &QueryScope<CandidatePath>) -> Condition {
        let r = self.request;
        let exclusion = r.exclusion_list_id.map(|list| {
            Condition::in_subquery(scope.primary_key(), CANDIDATE_SAVED_LIST.members_of(&[list]))
                .negate()
        });
        Condition::True
            .and_opt(membership(
                scope,
                &CANDIDATE_SAVED_LIST,
                &r.list_any_ids,
                MembershipMode::Any,
                r.list_any_search_type,
            ))
            .and_opt(membership(
                scope,
                &CANDIDATE_SAVED_LIST,
                &r.list_all_ids,
                MembershipMode::All,
                r.list_all_search_type,
            ))
            .and_opt(exclusion)
    }
}

/// Candidates with a proficiency row for `language` at or above the given
/// levels. Both levels must hold on the same row.
fn proficiency(
    scope: &QueryScope<CandidatePath>,
    language: i64,
    min_spoken: Option<i64>,
    min_written: Option<i64>,
) -> Condition {
    let level = |column: &'static str, min: Option<i64>| {
        min.map(|min| Condition::compare(Column::sub(column), CompareOp::Ge, min))
    };
    let filter = Condition::eq(Column::sub("language_id"), language)
        .and_opt(level("spoken_level", min_spoken))
        .and_opt(level("written_level", min_written));
    Condition::in_subquery(
        scope.primary_key(),
        Subquery {
            table: CANDIDATE_LANGUAGE,
            select: "candidate_id",
            filter: Box::new(filter),
        },
    )
}

impl Specification for CandidateSearch<'_> {
    type Path = CandidatePath;

    fn entity(&self) -> &'static EntityDef {
        &CANDIDATE
    }

    fn fetches(&self) -> &'static [CandidatePath] {
        DISPLAY
    }

    fn condition(&self, scope: &mut QueryScope<CandidatePath>) -> Result<Condition> {
        let r = self.request;
        let caller = self.context.caller;

        let keyword = terms::keyword(scope, r.keyword.as_deref(), KEYWORD_FIELDS, CANDIDATE_NUMBER);
        let statuses = terms::in_set(scope, Field::root("status"), stored_values(&r.statuses), None);
        let gender = terms::in_set(scope, Field::root("gender"), stored_values(&r.gender), None);
        let unhcr = terms::in_set(
            scope,
            Field::root("unhcr_status"),
            stored_values(&r.unhcr_statuses),
            None,
        );

        // Occupation and experience bounds apply to the same occupation row.
        let occupations = terms::in_set(
            scope,
            Field::on(CandidateOccupations, "occupation_id"),
            id_values(&r.occupation_ids),
            None,
        );
        let experience = terms::range(
            scope,
            Field::on(CandidateOccupations, "years_experience"),
            r.min_yrs.map(|y| i64::from(y).into()),
            r.max_yrs.map(|y| i64::from(y).into()),
            Unknowns::Exclude,
        );

        let nationalities = terms::in_set(
            scope,
            Field::root("nationality_id"),
            id_values(&r.nationality_ids),
            r.nationality_search_type,
        );
        let countries = terms::in_set(
            scope,
            Field::root("country_id"),
            id_values(&r.country_ids),
            r.country_search_type,
        );
        let country_scope = default_scope(
            scope,
            Field::root("country_id"),
            &r.country_ids,
            &caller.permitted_countries,
        );

        let partners = terms::in_set(
            scope,
            Field::on(User, "partner_id"),
            id_values(&r.partner_ids),
            None,
        );
        let survey_types = terms::in_set(
            scope,
            Field::root("survey_type_id"),
            id_values(&r.survey_type_ids),
            None,
        );
        let majors = terms::in_set(
            scope,
            Field::on(CandidateEducations, "education_major_id"),
            id_values(&r.education_major_ids),
            None,
        );
        let education_level = terms::range(
            scope,
            Field::on(MaxEducationLevel, "level"),
            r.min_education_level.map(Into::into),
            None,
            Unknowns::Exclude,
        );

        let age = self.age(scope);
        let (rego_from, rego_to) = day_bounds(r.rego_from, r.rego_to);
        let registered = terms::range(
            scope,
            Field::root("created_date"),
            rego_from,
            rego_to,
            Unknowns::Exclude,
        );
        let (modified_from, modified_to) = day_bounds(r.last_modified_from, r.last_modified_to);
        let modified = terms::range(
            scope,
            Field::root("updated_date"),
            modified_from,
            modified_to,
            Unknowns::Exclude,
        );

        let mini_intake = terms::presence(
            scope,
            Field::root("mini_intake_completed_date"),
            r.mini_intake_completed,
        );
        let full_intake = terms::presence(
            scope,
            Field::root("full_intake_completed_date"),
            r.full_intake_completed,
        );
        let duplicate = terms::flag(scope, Field::root("potential_duplicate"), r.potential_duplicate);
        let referrer = r
            .rego_referrer_param
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| Condition::eq_ignore_case(scope.column(Field::root("rego_referrer_param")), p));

        Ok(Condition::True
            .and_opt(keyword)
            .and_opt(statuses)
            .and_opt(gender)
            .and_opt(unhcr)
            .and_opt(occupations)
            .and_opt(experience)
            .and_opt(nationalities)
            .and_opt(countries)
            .and_opt(country_scope)
            .and_opt(partners)
            .and_opt(survey_types)
            .and_opt(majors)
            .and_opt(education_level)
            .and(self.languages(scope)?)
            .and_opt(age)
            .and_opt(registered)
            .and_opt(modified)
            .and_opt(mini_intake)
            .and_opt(full_intake)
            .and_opt(duplicate)
            .and_opt(referrer)
            .and(self.saved_lists(scope)))
    }
}
