//! In-memory evaluation of assembled queries.
//!
//! Follows SQL semantics: comparisons involving null are unknown, `AND`/`OR`
//! use three-valued logic, relationship traversals behave as `LEFT JOIN`s,
//! and a root row matches when any joined tuple satisfies the condition.

use crate::condition::{CompareOp, Condition, Subquery};
use crate::graph::JoinPath;
use crate::order::{Direction, Order};
use crate::scope::{Column, Source};
use crate::spec::SearchQuery;
use crate::value::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One row with its columns and related rows by relation name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
    relations: BTreeMap<String, Vec<Record>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    pub fn with_one(mut self, relation: impl Into<String>, record: Record) -> Self {
        self.relations.insert(relation.into(), vec![record]);
        self
    }

    pub fn with_many(mut self, relation: impl Into<String>, records: Vec<Record>) -> Self {
        self.relations.insert(relation.into(), records);
        self
    }

    /// Column value; missing columns read as null.
    pub fn get(&self, column: &str) -> &Value {
        self.fields.get(column).unwrap_or(&Value::Null)
    }

    pub fn related(&self, relation: &str) -> &[Record] {
        self.relations
            .get(relation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn id(&self) -> Option<i64> {
        self.get("id").as_int()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn relations(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.relations.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Tables of records, keyed by table name.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    tables: BTreeMap<String, Vec<Record>>,
}

type Tuple<'a> = Vec<Option<&'a Record>>;

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: impl Into<String>, record: Record) {
        self.tables.entry(table.into()).or_default().push(record);
    }

    pub fn table(&self, name: &str) -> &[Record] {
        self.tables.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Matching root rows in query order. Count queries keep table order.
    pub fn matching<J: JoinPath>(&self, query: &SearchQuery<J>) -> Vec<&Record> {
        let mut hits: Vec<(&Record, Tuple<'_>)> = self
            .table(query.entity().table)
            .iter()
            .filter_map(|root| {
                let tuples = expand(query, root);
                let matched = tuples.iter().any(|tuple| {
                    let ctx = Ctx {
                        data: self,
                        root,
                        tuple,
                        sub: None,
                    };
                    ctx.eval(query.condition()) == Some(true)
                });
                matched.then(|| (root, tuples.into_iter().next().unwrap_or_default()))
            })
            .collect();

        if !query.orders().is_empty() {
            hits.sort_by(|a, b| compare_rows(query.orders(), (a.0, &a.1), (b.0, &b.1)));
        }
        hits.into_iter().map(|(r, _)| r).collect()
    }

    pub fn count<J: JoinPath>(&self, query: &SearchQuery<J>) -> u64 {
        self.matching(query).len() as u64
    }

    /// One page of matching rows.
    pub fn page<J: JoinPath>(
        &self,
        query: &SearchQuery<J>,
        offset: u64,
        limit: u64,
    ) -> Vec<&Record> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        self.matching(query)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect()
    }
}

/// Every combination of joined rows for `root`. A relation with no rows
/// contributes a single null, as in a `LEFT JOIN`.
fn expand<'a, J: JoinPath>(query: &SearchQuery<J>, root: &'a Record) -> Vec<Tuple<'a>> {
    let mut tuples: Vec<Tuple<'a>> = vec![Vec::with_capacity(query.joins().len())];
    for join in query.joins() {
        let relation = join.path.relation();
        let mut next = Vec::with_capacity(tuples.len());
        for tuple in tuples {
            let parent = match join.parent {
                Source::Root => Some(root),
                Source::Join(id) => tuple.get(id.index()).copied().flatten(),
                Source::Sub => None,
            };
            let children = parent.map(|p| p.related(relation.name)).unwrap_or(&[]);
            if children.is_empty() {
                let mut t = tuple;
                t.push(None);
                next.push(t);
            } else {
                for child in children {
                    let mut t = tuple.clone();
                    t.push(Some(child));
                    next.push(t);
                }
            }
        }
        tuples = next;
    }
    tuples
}

fn lookup<'a>(root: &'a Record, tuple: &[Option<&'a Record>], column: Column) -> &'a Value {
    match column.source {
        Source::Root => root.get(column.name),
        Source::Join(id) => match tuple.get(id.index()).copied().flatten() {
            Some(r) => r.get(column.name),
            None => &Value::Null,
        },
        Source::Sub => &Value::Null,
    }
}

fn compare_rows(
    orders: &[Order],
    (a, ta): (&Record, &Tuple<'_>),
    (b, tb): (&Record, &Tuple<'_>),
) -> Ordering {
    for order in orders {
        let va = lookup(a, ta, order.column);
        let vb = lookup(b, tb, order.column);
        let ord = match (va.is_null(), vb.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = va.compare(vb).unwrap_or(Ordering::Equal);
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

struct Ctx<'a> {
    data: &'a Dataset,
    root: &'a Record,
    tuple: &'a [Option<&'a Record>],
    sub: Option<&'a Record>,
}

impl Ctx<'_> {
    fn value(&self, column: Column) -> &Value {
        match (column.source, self.sub) {
            (Source::Sub, Some(sub)) => sub.get(column.name),
            _ => lookup(self.root, self.tuple, column),
        }
    }

    fn eval(&self, cond: &Condition) -> Option<bool> {
        match cond {
            Condition::True => Some(true),
            Condition::Compare { column, cmp, value } => {
                let left = self.value(*column);
                if left.is_null() || value.is_null() {
                    return None;
                }
                let ord = left.compare(value)?;
                Some(match cmp {
                    CompareOp::Eq => ord == Ordering::Equal,
                    CompareOp::Ne => ord != Ordering::Equal,
                    CompareOp::Lt => ord == Ordering::Less,
                    CompareOp::Le => ord != Ordering::Greater,
                    CompareOp::Gt => ord == Ordering::Greater,
                    CompareOp::Ge => ord != Ordering::Less,
                })
            }
            Condition::In { column, values } => in_list(self.value(*column), values.iter()),
            Condition::Contains { column, needle } => {
                let left = self.value(*column);
                if left.is_null() {
                    return None;
                }
                let text = left.as_text()?;
                Some(text.to_lowercase().contains(needle.as_str()))
            }
            Condition::EqualsIgnoreCase { column, value } => {
                let left = self.value(*column);
                if left.is_null() {
                    return None;
                }
                Some(left.as_text()?.to_lowercase() == *value)
            }
            Condition::IsNull { column } => Some(self.value(*column).is_null()),
            Condition::InSubquery { column, subquery } => self.in_subquery(*column, subquery),
            Condition::And { terms } => {
                let mut unknown = false;
                for term in terms {
                    match self.eval(term) {
                        Some(false) => return Some(false),
                        None => unknown = true,
                        Some(true) => {}
                    }
                }
                if unknown {
                    None
                } else {
                    Some(true)
                }
            }
            Condition::Or { terms } => {
                let mut unknown = false;
                for term in terms {
                    match self.eval(term) {
                        Some(true) => return Some(true),
                        None => unknown = true,
                        Some(false) => {}
                    }
                }
                if unknown {
                    None
                } else {
                    Some(false)
                }
            }
            Condition::Not { term } => self.eval(term).map(|b| !b),
        }
    }

    fn in_subquery(&self, column: Column, subquery: &Subquery) -> Option<bool> {
        let left = self.value(column);
        let selected: Vec<&Value> = self
            .data
            .table(subquery.table)
            .iter()
            .filter(|row| {
                let inner = Ctx {
                    data: self.data,
                    root: self.root,
                    tuple: self.tuple,
                    sub: Some(*row),
                };
                inner.eval(&subquery.filter) == Some(true)
            })
            .map(|row| row.get(subquery.select))
            .collect();
        in_list(left, selected.into_iter())
    }
}

/// SQL `IN`: true on a match, unknown when the probe or any candidate is null
/// and nothing matched, otherwise false.
fn in_list<'v>(left: &Value, candidates: impl Iterator<Item = &'v Value>) -> Option<bool> {
    let mut unknown = left.is_null();
    let mut empty = true;
    for candidate in candidates {
        empty = false;
        if candidate.is_null() {
            unknown = true;
        } else if !left.is_null() && left.compare(candidate) == Some(Ordering::Equal) {
            return Some(true);
        }
    }
    if empty {
        return Some(false);
    }
    if unknown {
        None
    } else {
        Some(false)
    }
}
