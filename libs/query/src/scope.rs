//! Per-build join scope (entity graph accessor).
//!
//! A [`QueryScope`] lives for exactly one specification build. The first
//! request for a relationship path creates its join; later requests from
//! filters or the sort composer get the cached handle back, so each path is
//! traversed once per query.

use crate::graph::{EntityDef, Field, JoinPath};
use serde::Serialize;
use std::collections::HashMap;

/// Whether the built query materializes rows or only counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    Rows,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    /// Traversal whose target row is loaded alongside the root row.
    Fetch,
    /// Traversal used only for filtering or ordering.
    Join,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JoinId(pub(crate) usize);

impl JoinId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Table a column is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Root,
    Join(JoinId),
    /// The table of the enclosing membership subquery.
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    pub source: Source,
    pub name: &'static str,
}

impl Column {
    pub const fn root(name: &'static str) -> Self {
        Self {
            source: Source::Root,
            name,
        }
    }

    pub const fn sub(name: &'static str) -> Self {
        Self {
            source: Source::Sub,
            name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinHandle {
    pub id: JoinId,
    pub kind: JoinKind,
}

impl JoinHandle {
    pub fn col(&self, name: &'static str) -> Column {
        Column {
            source: Source::Join(self.id),
            name,
        }
    }
}

/// A created traversal.
#[derive(Debug, Clone)]
pub struct Join<J> {
    pub handle: JoinHandle,
    pub path: J,
    pub parent: Source,
}

#[derive(Debug)]
pub struct QueryScope<J: JoinPath> {
    entity: &'static EntityDef,
    mode: QueryMode,
    joins: Vec<Join<J>>,
    by_path: HashMap<J, JoinHandle>,
}

impl<J: JoinPath> QueryScope<J> {
    pub fn new(entity: &'static EntityDef, mode: QueryMode) -> Self {
        Self {
            entity,
            mode,
            joins: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    pub fn entity(&self) -> &'static EntityDef {
        self.entity
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn is_count(&self) -> bool {
        self.mode == QueryMode::Count
    }

    /// Returns the handle for `path`, creating it (and its ancestors) on first use.
    ///
    /// Row queries fetch to-one paths; collections are never fetched, and count
    /// queries only ever join.
    pub fn resolve(&mut self, path: J) -> JoinHandle {
        if let Some(handle) = self.by_path.get(&path) {
            return *handle;
        }

        let parent = match path.parent() {
            Some(p) => Source::Join(self.resolve(p).id),
            None => Source::Root,
        };

        let kind = if self.mode == QueryMode::Rows && !path.fans_out() {
            JoinKind::Fetch
        } else {
            JoinKind::Join
        };

        let handle = JoinHandle {
            id: JoinId(self.joins.len()),
            kind,
        };
        tracing::trace!(
            entity = self.entity.name,
            path = path.path(),
            kind = ?kind,
            "creating join"
        );
        self.joins.push(Join {
            handle,
            path,
            parent,
        });
        self.by_path.insert(path, handle);
        handle
    }

    /// Resolves the path of `field` (if any) and returns the addressed column.
    pub fn column(&mut self, field: Field<J>) -> Column {
        match field.path {
            Some(path) => self.resolve(path).col(field.column),
            None => Column::root(field.column),
        }
    }

    pub fn primary_key(&self) -> Column {
        Column::root(self.entity.primary_key)
    }

    /// Existing handle for `path`, without creating one.
    pub fn handle(&self, path: J) -> Option<JoinHandle> {
        self.by_path.get(&path).copied()
    }

    pub fn joins(&self) -> &[Join<J>] {
        &self.joins
    }

    /// Number of joins created so far in this build.
    pub fn created(&self) -> usize {
        self.joins.len()
    }

    pub(crate) fn into_joins(self) -> Vec<Join<J>> {
        self.joins
    }
}
