//! Ownership and visibility restriction.

use crate::condition::Condition;
use crate::graph::{Field, JoinPath};
use crate::scope::QueryScope;
use crate::value::Value;
use std::collections::BTreeSet;

/// Collects requested ownership alternatives ("owned by me", "shared with me",
/// ...) that combine by OR among themselves.
#[derive(Debug, Default)]
pub struct Ownership {
    alternatives: Vec<Condition>,
}

impl Ownership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the alternative built by `build` when `requested` is `Some(true)`.
    ///
    /// `build` only runs for requested alternatives, so unrequested ones never
    /// resolve their join paths.
    pub fn offer(
        &mut self,
        requested: Option<bool>,
        build: impl FnOnce() -> Condition,
    ) -> &mut Self {
        if requested == Some(true) {
            self.alternatives.push(build());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// The disjunction of requested alternatives, or `None` when nothing was
    /// requested.
    pub fn into_condition(self) -> Option<Condition> {
        Condition::any(self.alternatives)
    }

    /// ANDs the disjunction onto `condition`; an empty disjunction is dropped.
    pub fn apply(self, condition: Condition) -> Condition {
        condition.and_opt(self.into_condition())
    }
}

/// Default visibility scope on one dimension (e.g. country).
///
/// Applies only when the request carries no explicit values for the dimension
/// and the caller is restricted on it. An empty permitted set means the caller
/// is unrestricted.
pub fn default_scope<J: JoinPath>(
    scope: &mut QueryScope<J>,
    field: Field<J>,
    explicit: &[i64],
    permitted: &BTreeSet<i64>,
) -> Option<Condition> {
    if !explicit.is_empty() || permitted.is_empty() {
        return None;
    }
    let values = permitted.iter().copied().map(Value::Int).collect();
    Some(Condition::in_values(scope.column(field), values))
}
