//! Set-membership subqueries against join tables.
//!
//! Callers only name the membership table and pass `(group_ids, search_type)`;
//! the subquery shape stays here.

use crate::condition::{Condition, Subquery};
use crate::graph::JoinPath;
use crate::scope::{Column, QueryScope};
use crate::terms::SearchType;
use crate::value::Value;

/// Join table linking members (rows of the searched entity) to groups.
#[derive(Debug)]
pub struct MembershipTable {
    pub table: &'static str,
    pub member_column: &'static str,
    pub group_column: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipMode {
    /// Member of at least one group.
    Any,
    /// Member of every group.
    All,
}

impl MembershipTable {
    /// `SELECT member_column FROM table WHERE group_column IN group_ids`.
    pub fn members_of(&self, group_ids: &[i64]) -> Subquery {
        let group = Column::sub(self.group_column);
        let filter = match group_ids {
            [single] => Condition::eq(group, *single),
            _ => Condition::in_values(
                group,
                group_ids.iter().copied().map(Value::Int).collect(),
            ),
        };
        Subquery {
            table: self.table,
            select: self.member_column,
            filter: Box::new(filter),
        }
    }
}

/// Membership condition on the root primary key.
///
/// - `Any`: one subquery over all groups; `Not` negates it.
/// - `All`: one subquery per group, ANDed; `Not` negates each subquery on its
///   own, which yields "in none of the groups".
///
/// No group ids means no constraint.
pub fn membership<J: JoinPath>(
    scope: &QueryScope<J>,
    table: &MembershipTable,
    group_ids: &[i64],
    mode: MembershipMode,
    search_type: Option<SearchType>,
) -> Option<Condition> {
    if group_ids.is_empty() {
        return None;
    }
    let id = scope.primary_key();
    let negate = SearchType::is_not(search_type);
    let member_of = |ids: &[i64]| {
        let term = Condition::in_subquery(id, table.members_of(ids));
        if negate {
            term.negate()
        } else {
            term
        }
    };

    match mode {
        MembershipMode::Any => Some(member_of(group_ids)),
        MembershipMode::All => Some(Condition::all(
            group_ids.iter().map(|g| member_of(std::slice::from_ref(g))),
        )),
    }
}
