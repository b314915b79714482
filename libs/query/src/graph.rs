//! Typed entity graph descriptors.
//!
//! Each searchable entity declares its reachable relationships as an enum
//! implementing [`JoinPath`]. Filter code refers to columns through
//! [`Field`] values built from those enums, so a misspelled relationship is a
//! compile error rather than a failure at query time. Sort fields arrive as
//! dotted strings and are parsed back into the same descriptors.

use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ToOne,
    ToMany,
}

/// Root table of a searchable entity.
#[derive(Debug)]
pub struct EntityDef {
    /// Entity name used in diagnostics.
    pub name: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    /// Columns addressable by sort field names.
    pub columns: &'static [&'static str],
}

impl EntityDef {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

/// One relationship hop from a parent table to a child table.
///
/// The traversal matches `child.foreign_key = parent.local_key`.
#[derive(Debug)]
pub struct Relation {
    /// Relation name on the parent record.
    pub name: &'static str,
    pub table: &'static str,
    pub local_key: &'static str,
    pub foreign_key: &'static str,
    pub cardinality: Cardinality,
    pub columns: &'static [&'static str],
}

impl Relation {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

/// Relationship path descriptor for one root entity.
pub trait JoinPath: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every path reachable from the root, parents listed before children.
    fn all() -> &'static [Self];

    /// Dotted path from the root, e.g. `user.partner`.
    fn path(self) -> &'static str;

    fn parent(self) -> Option<Self>;

    fn relation(self) -> &'static Relation;

    fn parse(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.path() == path)
    }

    /// True when this path or any ancestor is a to-many hop.
    fn fans_out(self) -> bool {
        let mut current = Some(self);
        while let Some(p) = current {
            if p.relation().cardinality == Cardinality::ToMany {
                return true;
            }
            current = p.parent();
        }
        false
    }
}

/// Path descriptor for entities with no relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoJoin {}

impl JoinPath for NoJoin {
    fn all() -> &'static [Self] {
        &[]
    }

    fn path(self) -> &'static str {
        match self {}
    }

    fn parent(self) -> Option<Self> {
        match self {}
    }

    fn relation(self) -> &'static Relation {
        match self {}
    }
}

/// A column reached from the root, optionally through a relationship path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<J> {
    pub path: Option<J>,
    pub column: &'static str,
}

impl<J> Field<J> {
    pub const fn root(column: &'static str) -> Self {
        Self { path: None, column }
    }

    pub const fn on(path: J, column: &'static str) -> Self {
        Self {
            path: Some(path),
            column,
        }
    }
}
