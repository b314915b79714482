//! Specification assembly.
//!
//! A [`Specification`] knows one entity's filters. [`assemble`] drives it
//! through a fresh [`QueryScope`] and produces a [`SearchQuery`] that a paged
//! query executor can run.

use crate::condition::Condition;
use crate::error::Result;
use crate::graph::{EntityDef, JoinPath};
use crate::order::{self, Order, SortRequest};
use crate::scope::{Join, JoinKind, QueryMode, QueryScope};

pub trait Specification {
    type Path: JoinPath;

    fn entity(&self) -> &'static EntityDef;

    /// Paths loaded alongside each row for display. Only row queries fetch them.
    fn fetches(&self) -> &'static [Self::Path] {
        &[]
    }

    /// Builds the filter condition, starting from [`Condition::True`].
    ///
    /// Must not depend on the scope's mode: row and count queries for the same
    /// request filter identically.
    fn condition(&self, scope: &mut QueryScope<Self::Path>) -> Result<Condition>;
}

/// The result of one build: condition, joins and (for row queries) order.
#[derive(Debug, Clone)]
pub struct SearchQuery<J> {
    entity: &'static EntityDef,
    mode: QueryMode,
    joins: Vec<Join<J>>,
    condition: Condition,
    orders: Vec<Order>,
}

impl<J: JoinPath> SearchQuery<J> {
    pub(crate) fn new(scope: QueryScope<J>, condition: Condition, orders: Vec<Order>) -> Self {
        Self {
            entity: scope.entity(),
            mode: scope.mode(),
            joins: scope.into_joins(),
            condition,
            orders,
        }
    }

    pub fn entity(&self) -> &'static EntityDef {
        self.entity
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn joins(&self) -> &[Join<J>] {
        &self.joins
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// True when a to-many join can repeat root rows.
    pub fn distinct(&self) -> bool {
        self.joins.iter().any(|j| j.path.fans_out())
    }

    pub fn fetches(&self) -> impl Iterator<Item = &Join<J>> {
        self.joins
            .iter()
            .filter(|j| j.handle.kind == JoinKind::Fetch)
    }

    /// Number of joins created for `path` (0 or 1).
    pub fn join_count(&self, path: J) -> usize {
        self.joins.iter().filter(|j| j.path == path).count()
    }
}

/// Builds the query for `spec`.
///
/// Row queries resolve display fetches and the sort order before the filters
/// run, so filter terms reuse those handles. Count queries skip both.
pub fn assemble<S: Specification>(
    spec: &S,
    mode: QueryMode,
    sort: &SortRequest,
) -> Result<SearchQuery<S::Path>> {
    let mut scope = QueryScope::new(spec.entity(), mode);

    let orders = match mode {
        QueryMode::Rows => {
            for path in spec.fetches() {
                scope.resolve(*path);
            }
            order::compose(&mut scope, sort)?
        }
        QueryMode::Count => Vec::new(),
    };

    let condition = spec.condition(&mut scope)?;

    tracing::debug!(
        entity = spec.entity().name,
        mode = ?mode,
        joins = scope.created(),
        orders = orders.len(),
        "assembled search specification"
    );

    Ok(SearchQuery::new(scope, condition, orders))
}
