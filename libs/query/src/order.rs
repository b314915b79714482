//! Sort order composition.

use crate::error::{Error, Result};
use crate::graph::{Cardinality, EntityDef, Field, JoinPath};
use crate::scope::{Column, QueryScope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Order {
    pub column: Column,
    pub direction: Direction,
}

/// Requested sort field names with one direction for all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortRequest {
    pub fields: Vec<String>,
    pub direction: Direction,
}

impl SortRequest {
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>, direction: Direction) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            direction,
        }
    }
}

/// Parses a sort field name into a typed field.
///
/// `user.partner.name` resolves the `user.partner` path and its `name` column;
/// a name without a dot addresses a root column. Paths through a to-many
/// relation are rejected since they have no single value per row.
pub fn parse_field<J: JoinPath>(entity: &'static EntityDef, name: &str) -> Result<Field<J>> {
    let name = name.trim();
    let unknown = || Error::UnknownSortField {
        entity: entity.name,
        field: name.to_string(),
    };

    let Some((prefix, column)) = name.rsplit_once('.') else {
        let column = entity
            .columns
            .iter()
            .copied()
            .find(|c| *c == name)
            .ok_or_else(unknown)?;
        return Ok(Field::root(column));
    };

    let path = J::parse(prefix).ok_or_else(unknown)?;
    let column = path
        .relation()
        .columns
        .iter()
        .copied()
        .find(|c| *c == column)
        .ok_or_else(unknown)?;

    if path.fans_out() {
        let relation = std::iter::successors(Some(path), |p| p.parent())
            .map(|p| p.relation())
            .find(|r| r.cardinality == Cardinality::ToMany)
            .map_or(path.relation().name, |r| r.name);
        return Err(Error::UnsortablePath {
            field: name.to_string(),
            relation,
        });
    }

    Ok(Field::on(path, column))
}

/// Builds the order list, reusing join handles already in `scope`.
///
/// Unless the caller sorted by the primary key, a descending primary-key order
/// is appended so the order is total and pages stay stable.
pub fn compose<J: JoinPath>(scope: &mut QueryScope<J>, sort: &SortRequest) -> Result<Vec<Order>> {
    let entity = scope.entity();
    let mut orders = Vec::with_capacity(sort.fields.len() + 1);
    for name in &sort.fields {
        let field = parse_field::<J>(entity, name)?;
        orders.push(Order {
            column: scope.column(field),
            direction: sort.direction,
        });
    }

    let primary_key = scope.primary_key();
    if !orders.iter().any(|o| o.column == primary_key) {
        orders.push(Order {
            column: primary_key,
            direction: Direction::Desc,
        });
    }
    Ok(orders)
}
