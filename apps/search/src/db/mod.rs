//! Paged query execution against storage.

pub mod memory;
pub mod postgres;
pub mod traits;

pub use memory::MemoryExecutor;
pub use postgres::PostgresExecutor;
pub use traits::PagedQueryExecutor;

use catalog_query::Value;
use serde_json::{Map, Value as JsonValue};

/// JSON form of a column value, matching Postgres `to_jsonb`.
pub fn value_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::from(*i),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Date(d) => JsonValue::String(d.format("%Y-%m-%d").to_string()),
        Value::Timestamp(t) => JsonValue::String(t.to_rfc3339()),
    }
}

/// Places `value` under the dotted `path` of `row`.
///
/// Parents are nested before their children, so a missing parent object means
/// the parent row was null and the value is dropped.
pub(crate) fn nest(row: &mut JsonValue, path: &str, value: JsonValue) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let Some(last) = segments.pop() else {
        return;
    };
    let mut target = row;
    for segment in segments {
        match target.get_mut(segment) {
            Some(next) if next.is_object() => target = next,
            _ => return,
        }
    }
    if let Some(object) = target.as_object_mut() {
        object.insert(last.to_string(), value);
    }
}

pub(crate) fn object(fields: impl IntoIterator<Item = (String, JsonValue)>) -> JsonValue {
    JsonValue::Object(fields.into_iter().collect::<Map<_, _>>())
}
