//! Boolean condition tree.
//!
//! Conditions are built incrementally: a build starts from [`Condition::True`]
//! and each filter category narrows it with [`Condition::and`]. The tree is
//! storage-agnostic; [`crate::sql`] renders it for Postgres and
//! [`crate::eval`] evaluates it in memory.

use crate::scope::Column;
use crate::value::Value;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

/// `SELECT select FROM table WHERE filter`, where `filter` reads
/// [`crate::scope::Source::Sub`] columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subquery {
    pub table: &'static str,
    pub select: &'static str,
    pub filter: Box<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    True,
    Compare {
        column: Column,
        cmp: CompareOp,
        value: Value,
    },
    In {
        column: Column,
        values: Vec<Value>,
    },
    /// Case-insensitive substring match; `needle` is already lower-cased.
    Contains {
        column: Column,
        needle: String,
    },
    /// Case-insensitive equality; `value` is already lower-cased.
    EqualsIgnoreCase {
        column: Column,
        value: String,
    },
    IsNull {
        column: Column,
    },
    InSubquery {
        column: Column,
        subquery: Subquery,
    },
    And {
        terms: Vec<Condition>,
    },
    Or {
        terms: Vec<Condition>,
    },
    Not {
        term: Box<Condition>,
    },
}

impl Condition {
    pub fn compare(column: Column, cmp: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare {
            column,
            cmp,
            value: value.into(),
        }
    }

    pub fn eq(column: Column, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Eq, value)
    }

    pub fn in_values(column: Column, values: Vec<Value>) -> Self {
        Self::In { column, values }
    }

    pub fn contains(column: Column, needle: impl Into<String>) -> Self {
        Self::Contains {
            column,
            needle: needle.into(),
        }
    }

    pub fn eq_ignore_case(column: Column, value: &str) -> Self {
        Self::EqualsIgnoreCase {
            column,
            value: value.to_lowercase(),
        }
    }

    pub fn is_null(column: Column) -> Self {
        Self::IsNull { column }
    }

    pub fn is_not_null(column: Column) -> Self {
        Self::is_null(column).negate()
    }

    pub fn in_subquery(column: Column, subquery: Subquery) -> Self {
        Self::InSubquery { column, subquery }
    }

    pub fn negate(self) -> Self {
        Self::Not {
            term: Box::new(self),
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::True)
    }

    /// Conjunction with `True` as identity; nested conjunctions are flattened.
    pub fn and(self, other: Condition) -> Self {
        match (self, other) {
            (Self::True, c) | (c, Self::True) => c,
            (Self::And { mut terms }, Self::And { terms: more }) => {
                terms.extend(more);
                Self::And { terms }
            }
            (Self::And { mut terms }, c) => {
                terms.push(c);
                Self::And { terms }
            }
            (c, Self::And { terms }) => {
                let mut all = Vec::with_capacity(terms.len() + 1);
                all.push(c);
                all.extend(terms);
                Self::And { terms: all }
            }
            (a, b) => Self::And { terms: vec![a, b] },
        }
    }

    /// Narrows by `other` when present.
    pub fn and_opt(self, other: Option<Condition>) -> Self {
        match other {
            Some(c) => self.and(c),
            None => self,
        }
    }

    /// Conjunction of all terms; `True` when there are none.
    pub fn all(terms: impl IntoIterator<Item = Condition>) -> Self {
        terms.into_iter().fold(Self::True, Self::and)
    }

    /// Disjunction of all terms, or `None` when there are none.
    ///
    /// An empty disjunction is absent rather than false, so callers drop it
    /// instead of excluding every row.
    pub fn any(terms: impl IntoIterator<Item = Condition>) -> Option<Self> {
        let mut terms: Vec<Condition> = terms.into_iter().collect();
        match terms.len() {
            0 => None,
            1 => terms.pop(),
            _ => Some(Self::Or { terms }),
        }
    }
}
