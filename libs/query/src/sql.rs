//! Postgres rendering of assembled queries.
//!
//! Rendering is positional: every literal becomes a `$n` placeholder with a
//! matching [`BindValue`]. Aliases are `r` for the root table, `j{n}` for
//! joins (in creation order, starting at `j1`) and `s{n}` for subqueries.

use crate::condition::{Condition, Subquery};
use crate::graph::JoinPath;
use crate::scope::{Column, Source};
use crate::spec::SearchQuery;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Write;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    IntArray(Vec<i64>),
    TextArray(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Column holding the root row as JSON in rendered row queries.
pub const ROW_COLUMN: &str = "row";

/// `SELECT ... ORDER BY ... LIMIT ... OFFSET ...` for one page of rows.
///
/// Selects the root row and each fetched relationship (aliased by its path)
/// as JSON. Sort keys are projected as `sort_{i}` so they remain valid under
/// `DISTINCT`.
pub fn rows_sql<J: JoinPath>(query: &SearchQuery<J>, limit: u64, offset: u64) -> SqlQuery {
    let mut r = Renderer::new(query);

    let mut select = vec![format!("to_jsonb(r) AS {ROW_COLUMN}")];
    for join in query.fetches() {
        select.push(format!(
            "to_jsonb({}) AS \"{}\"",
            join_alias(join.handle.id.index()),
            join.path.path()
        ));
    }
    for (i, order) in query.orders().iter().enumerate() {
        select.push(format!("{} AS sort_{i}", column(order.column, 0)));
    }

    let distinct = if query.distinct() { "DISTINCT " } else { "" };
    let mut sql = format!("SELECT {distinct}{}", select.join(", "));
    r.from_where(&mut sql);

    if !query.orders().is_empty() {
        let keys: Vec<String> = query
            .orders()
            .iter()
            .enumerate()
            .map(|(i, o)| format!("sort_{i} {} NULLS LAST", o.direction.as_sql()))
            .collect();
        let _ = write!(sql, " ORDER BY {}", keys.join(", "));
    }

    let limit = r.bind(BindValue::Int(clamp(limit)));
    let offset = r.bind(BindValue::Int(clamp(offset)));
    let _ = write!(sql, " LIMIT {limit} OFFSET {offset}");

    SqlQuery {
        sql,
        binds: r.binds,
    }
}

/// `SELECT COUNT(...)` over the same joins and condition.
pub fn count_sql<J: JoinPath>(query: &SearchQuery<J>) -> SqlQuery {
    let mut r = Renderer::new(query);
    let mut sql = if query.distinct() {
        format!(
            "SELECT COUNT(DISTINCT r.{})",
            query.entity().primary_key
        )
    } else {
        "SELECT COUNT(*)".to_string()
    };
    r.from_where(&mut sql);
    SqlQuery {
        sql,
        binds: r.binds,
    }
}

/// Escapes LIKE metacharacters for use with `ESCAPE '\'`.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn clamp(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn join_alias(index: usize) -> String {
    format!("j{}", index + 1)
}

fn source_alias(source: Source, depth: usize) -> String {
    match source {
        Source::Root => "r".to_string(),
        Source::Join(id) => join_alias(id.index()),
        Source::Sub => format!("s{depth}"),
    }
}

fn column(col: Column, depth: usize) -> String {
    format!("{}.{}", source_alias(col.source, depth), col.name)
}

struct Renderer<'q, J> {
    query: &'q SearchQuery<J>,
    binds: Vec<BindValue>,
    depth: usize,
}

impl<'q, J: JoinPath> Renderer<'q, J> {
    fn new(query: &'q SearchQuery<J>) -> Self {
        Self {
            query,
            binds: Vec::new(),
            depth: 0,
        }
    }

    fn bind(&mut self, value: BindValue) -> String {
        self.binds.push(value);
        format!("${}", self.binds.len())
    }

    fn from_where(&mut self, sql: &mut String) {
        let _ = write!(sql, " FROM {} r", self.query.entity().table);
        for join in self.query.joins() {
            let relation = join.path.relation();
            let alias = join_alias(join.handle.id.index());
            let _ = write!(
                sql,
                " LEFT JOIN {} {alias} ON {alias}.{} = {}.{}",
                relation.table,
                relation.foreign_key,
                source_alias(join.parent, 0),
                relation.local_key
            );
        }
        let condition = self.query.condition();
        if !condition.is_true() {
            let rendered = self.condition(condition);
            let _ = write!(sql, " WHERE {rendered}");
        }
    }

    fn col(&self, col: Column) -> String {
        column(col, self.depth)
    }

    fn literal(&mut self, value: &Value) -> String {
        let bind = match value {
            Value::Null => return "NULL".to_string(),
            Value::Bool(b) => BindValue::Bool(*b),
            Value::Int(i) => BindValue::Int(*i),
            Value::Text(s) => BindValue::Text(s.clone()),
            Value::Date(d) => BindValue::Date(*d),
            Value::Timestamp(t) => BindValue::Timestamp(*t),
        };
        self.bind(bind)
    }

    fn condition(&mut self, cond: &Condition) -> String {
        match cond {
            Condition::True => "TRUE".to_string(),
            Condition::Compare { column, cmp, value } => {
                let value = self.literal(value);
                format!("{} {} {value}", self.col(*column), cmp.as_sql())
            }
            Condition::In { column, values } => self.in_values(*column, values),
            Condition::Contains { column, needle } => {
                let pattern = self.bind(BindValue::Text(format!("%{}%", escape_like(needle))));
                format!("lower({}) LIKE {pattern} ESCAPE '\\'", self.col(*column))
            }
            Condition::EqualsIgnoreCase { column, value } => {
                let value = self.bind(BindValue::Text(value.clone()));
                format!("lower({}) = {value}", self.col(*column))
            }
            Condition::IsNull { column } => format!("{} IS NULL", self.col(*column)),
            Condition::InSubquery { column, subquery } => {
                let outer = self.col(*column);
                let inner = self.subquery(subquery);
                format!("{outer} IN ({inner})")
            }
            Condition::And { terms } => self.junction(terms, " AND ", "TRUE"),
            Condition::Or { terms } => self.junction(terms, " OR ", "FALSE"),
            Condition::Not { term } => format!("NOT ({})", self.condition(term)),
        }
    }

    fn junction(&mut self, terms: &[Condition], sep: &str, empty: &str) -> String {
        if terms.is_empty() {
            return empty.to_string();
        }
        let parts: Vec<String> = terms.iter().map(|t| self.condition(t)).collect();
        format!("({})", parts.join(sep))
    }

    fn in_values(&mut self, column: Column, values: &[Value]) -> String {
        let col = self.col(column);
        if values.is_empty() {
            return "FALSE".to_string();
        }
        if let Some(ints) = values.iter().map(Value::as_int).collect::<Option<Vec<_>>>() {
            let p = self.bind(BindValue::IntArray(ints));
            return format!("{col} = ANY({p})");
        }
        if let Some(texts) = values
            .iter()
            .map(|v| v.as_text().map(str::to_string))
            .collect::<Option<Vec<_>>>()
        {
            let p = self.bind(BindValue::TextArray(texts));
            return format!("{col} = ANY({p})");
        }
        let list: Vec<String> = values.iter().map(|v| self.literal(v)).collect();
        format!("{col} IN ({})", list.join(", "))
    }

    fn subquery(&mut self, sub: &Subquery) -> String {
        self.depth += 1;
        let alias = format!("s{}", self.depth);
        let filter = self.condition(&sub.filter);
        self.depth -= 1;
        format!(
            "SELECT {alias}.{} FROM {} {alias} WHERE {filter}",
            sub.select, sub.table
        )
    }
}
