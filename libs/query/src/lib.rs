//! Predicate composition engine for catalog searches.
//!
//! Translates optional filter criteria into a single condition tree over a
//! typed entity graph, together with a stable ordering:
//! - Join scopes that create each relationship traversal at most once per build
//! - Term builders for keyword, set, range and tri-state filters
//! - Set-membership subqueries (any / all / negated)
//! - Ownership and visibility restriction
//! - Sort composition with a primary-key tie-break
//! - Rendering to parameterised SQL and in-memory evaluation

pub mod condition;
pub mod error;
pub mod eval;
pub mod graph;
pub mod membership;
pub mod order;
pub mod page;
pub mod restriction;
pub mod scope;
pub mod spec;
pub mod sql;
pub mod terms;
pub mod value;

#[cfg(test)]
mod testing;

pub use condition::{CompareOp, Condition, Subquery};
pub use error::{Error, Result};
pub use eval::{Dataset, Record};
pub use graph::{Cardinality, EntityDef, Field, JoinPath, NoJoin, Relation};
pub use membership::{MembershipMode, MembershipTable};
pub use order::{Direction, Order, SortRequest};
pub use page::{Page, PageRequest};
pub use restriction::Ownership;
pub use scope::{Column, Join, JoinHandle, JoinId, JoinKind, QueryMode, QueryScope, Source};
pub use spec::{assemble, SearchQuery, Specification};
pub use sql::{BindValue, SqlQuery};
pub use terms::{SearchType, Unknowns};
pub use value::Value;
