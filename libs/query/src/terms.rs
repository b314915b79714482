//! Predicate term builders.
//!
//! Each builder returns `None` when its input does not constrain the search.
//! Relationship paths are only resolved when a term is actually produced, so
//! an absent filter never adds a join.

use crate::condition::{CompareOp, Condition};
use crate::graph::{Field, JoinPath};
use crate::scope::QueryScope;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// How a multi-valued filter combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[serde(alias = "any")]
    Or,
    #[serde(alias = "all")]
    And,
    Not,
}

impl SearchType {
    pub fn is_not(search_type: Option<SearchType>) -> bool {
        search_type == Some(SearchType::Not)
    }
}

/// Whether rows with an unknown (null) value survive a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknowns {
    Exclude,
    Include,
}

/// Lower-cases `keyword` and splits it on whitespace, commas and periods.
pub fn tokenize(keyword: &str) -> Vec<String> {
    keyword
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every token must match at least one field.
///
/// A token matches a `contains` field by case-insensitive substring and an
/// `exact` field (structured identifiers) by equality.
pub fn keyword<J: JoinPath>(
    scope: &mut QueryScope<J>,
    keyword: Option<&str>,
    contains: &[Field<J>],
    exact: &[Field<J>],
) -> Option<Condition> {
    let tokens = tokenize(keyword?);
    if tokens.is_empty() {
        return None;
    }

    let contains: Vec<_> = contains.iter().map(|f| scope.column(*f)).collect();
    let exact: Vec<_> = exact.iter().map(|f| scope.column(*f)).collect();

    let per_token = tokens.into_iter().filter_map(|token| {
        let matches = contains
            .iter()
            .map(|col| Condition::contains(*col, token.clone()))
            .chain(exact.iter().map(|col| Condition::eq(*col, token.clone())));
        Condition::any(matches)
    });
    Some(Condition::all(per_token))
}

/// `field IN values`, or `NOT IN` for [`SearchType::Not`].
///
/// An empty set is treated as absent, never as "match nothing".
pub fn in_set<J: JoinPath>(
    scope: &mut QueryScope<J>,
    field: Field<J>,
    values: Vec<Value>,
    search_type: Option<SearchType>,
) -> Option<Condition> {
    if values.is_empty() {
        return None;
    }
    let condition = Condition::in_values(scope.column(field), values);
    if SearchType::is_not(search_type) {
        Some(condition.negate())
    } else {
        Some(condition)
    }
}

/// Independent lower and upper bounds, both inclusive.
pub fn range<J: JoinPath>(
    scope: &mut QueryScope<J>,
    field: Field<J>,
    min: Option<Value>,
    max: Option<Value>,
    unknowns: Unknowns,
) -> Option<Condition> {
    if min.is_none() && max.is_none() {
        return None;
    }
    let column = scope.column(field);
    let bound = |cmp: CompareOp, value: Value| {
        let term = Condition::compare(column, cmp, value);
        match unknowns {
            Unknowns::Exclude => term,
            Unknowns::Include => Condition::Or {
                terms: vec![term, Condition::is_null(column)],
            },
        }
    };

    let mut terms = Vec::new();
    if let Some(min) = min {
        terms.push(bound(CompareOp::Ge, min));
    }
    if let Some(max) = max {
        terms.push(bound(CompareOp::Le, max));
    }
    Some(Condition::all(terms))
}

/// Tri-state presence: `true` requires a value, `false` requires null.
pub fn presence<J: JoinPath>(
    scope: &mut QueryScope<J>,
    field: Field<J>,
    flag: Option<bool>,
) -> Option<Condition> {
    let flag = flag?;
    let column = scope.column(field);
    if flag {
        Some(Condition::is_not_null(column))
    } else {
        Some(Condition::is_null(column))
    }
}

/// Tri-state boolean column: `true` requires `= true`, `false` is the exact
/// complement (false or unset).
pub fn flag<J: JoinPath>(
    scope: &mut QueryScope<J>,
    field: Field<J>,
    flag: Option<bool>,
) -> Option<Condition> {
    let flag = flag?;
    let column = scope.column(field);
    if flag {
        Some(Condition::eq(column, true))
    } else {
        Condition::any([Condition::eq(column, false), Condition::is_null(column)])
    }
}
