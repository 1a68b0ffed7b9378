//! JSON interop.
//!
//! JSON documents convert into [`Value`] and can also be coerced directly. JSON has no `undefined`, no NaN and no
//! big integers, so its falsy values are `false`, `0`, `-0`, `""` and `null`.

use serde_json::Value as Json;

use crate::coerce::ToBoolean;
use crate::value::Value;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            // Integers beyond 2^53 lose precision, as they would in any double-based runtime.
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(entries) => Value::Object(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl ToBoolean for Json {
    fn to_boolean(&self) -> bool {
        match self {
            Json::Null => false,
            Json::Bool(b) => *b,
            Json::Number(n) => n.as_f64().is_some_and(|n| n.to_boolean()),
            Json::String(s) => !s.is_empty(),
            Json::Array(_) | Json::Object(_) => true,
        }
    }
}
