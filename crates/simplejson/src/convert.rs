//! Conversions between [`Json`] and `serde_json::Value`
//!
//! Parsing and printing stay with `serde_json`; this module only maps one
//! in-memory tree onto the other. Integers that fit in `i32` keep the integer
//! sub-kind, every other number becomes a double.

use serde_json::{Map, Value};

use crate::error::{JsonError, Result};
use crate::value::{Array, Json, Node, Number, Object};

impl From<&serde_json::Number> for Number {
    fn from(num: &serde_json::Number) -> Self {
        if let Some(n) = num.as_i64().and_then(|i| i32::try_from(i).ok()) {
            Number::Int(n)
        } else {
            // Only `arbitrary_precision` numbers can fail to widen
            Number::Double(num.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Json::null(),
            Value::Bool(b) => Json::boolean(*b),
            Value::Number(n) => Json::from(Number::from(n)),
            Value::String(s) => Json::string(s.as_str()),
            Value::Array(items) => Json::from(items.iter().map(Json::from).collect::<Array>()),
            Value::Object(map) => Json::from(
                map.iter()
                    .map(|(k, v)| (k.clone(), Json::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Json::string(s),
            Value::Array(items) => Json::from(items.into_iter().map(Json::from).collect::<Array>()),
            Value::Object(map) => Json::from(
                map.into_iter()
                    .map(|(k, v)| (k, Json::from(v)))
                    .collect::<Object>(),
            ),
            scalar => Json::from(&scalar),
        }
    }
}

impl TryFrom<&Json> for Value {
    type Error = JsonError;

    fn try_from(value: &Json) -> Result<Self> {
        Ok(match value.node() {
            Node::Null => Value::Null,
            Node::Boolean(b) => Value::Bool(*b),
            Node::Number(Number::Int(n)) => Value::from(*n),
            Node::Number(Number::Double(d)) => serde_json::Number::from_f64(*d)
                .map(Value::Number)
                .ok_or(JsonError::NonFiniteNumber(*d))?,
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => Value::Array(
                items
                    .iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Node::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), Value::try_from(v)?)))
                    .collect::<Result<Map<String, Value>>>()?,
            ),
        })
    }
}

impl TryFrom<Json> for Value {
    type Error = JsonError;

    fn try_from(value: Json) -> Result<Self> {
        Value::try_from(&value)
    }
}
