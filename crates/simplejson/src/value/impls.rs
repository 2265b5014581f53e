//! Json trait implementations: constructors, predicates, extractors, From traits, PartialEq

use super::*;
use crate::error::{JsonError, Result};

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Json {
    /// Create an integer value
    pub fn int(n: i32) -> Self {
        Json::from_node(Node::Number(Number::Int(n)))
    }

    /// Create a floating point value
    pub fn double(d: f64) -> Self {
        Json::from_node(Node::Number(Number::Double(d)))
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Json::from_node(Node::String(s.into()))
    }

    /// Create an empty object
    pub fn object() -> Self {
        Json::from_node(Node::Object(Object::new()))
    }

    /// Create an empty array
    pub fn array() -> Self {
        Json::from_node(Node::Array(Array::new()))
    }

    /// Move the value out, leaving null in its place
    pub fn take(&mut self) -> Json {
        std::mem::take(self)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// The kind of value this handle holds
    pub fn value_type(&self) -> JsonType {
        self.node().kind()
    }

    /// Check if value is an object
    pub fn is_object(&self) -> bool {
        self.value_type() == JsonType::Object
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        self.value_type() == JsonType::Array
    }

    /// Check if value is a number of either sub-kind
    pub fn is_number(&self) -> bool {
        self.value_type() == JsonType::Number
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        self.value_type() == JsonType::String
    }

    /// Check if value is a boolean
    pub fn is_boolean(&self) -> bool {
        self.value_type() == JsonType::Boolean
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        self.value_type() == JsonType::Null
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return a default on mismatch)
    // ═══════════════════════════════════════════════════════════════════
    /// Boolean value, or `false` for any other kind
    pub fn as_bool(&self) -> bool {
        if !self.is_boolean() {
            return false;
        }
        self.node().bool_unchecked()
    }

    /// Integer value (doubles truncated), or `0` for non-numbers
    pub fn as_int(&self) -> i32 {
        if !self.is_number() {
            return 0;
        }
        self.node().int_unchecked()
    }

    /// Double value, or `0.0` for non-numbers
    pub fn as_double(&self) -> f64 {
        if !self.is_number() {
            return 0.0;
        }
        self.node().double_unchecked()
    }

    /// String contents, or `""` for any other kind
    pub fn as_string(&self) -> &str {
        if !self.is_string() {
            return "";
        }
        self.node().str_unchecked()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for strict access)
    // ═══════════════════════════════════════════════════════════════════
    /// Number with its sub-kind preserved
    pub fn as_number(&self) -> Option<Number> {
        match self.node() {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Object members
    pub fn as_object(&self) -> Option<&Object> {
        match self.node() {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable object members
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self.node_mut() {
            Some(Node::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Array elements
    pub fn as_array(&self) -> Option<&Array> {
        match self.node() {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable array elements
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self.node_mut() {
            Some(Node::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// Number of members or elements; `0` for scalars
    pub fn len(&self) -> usize {
        match self.node() {
            Node::Object(map) => map.len(),
            Node::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Check if an object or array has no children; scalars count as empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Json {
    fn default() -> Self {
        Json::null()
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Json {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = (self.node(), other.node());
        left.kind() == right.kind() && left.equals(right)
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<()> for Json {
    fn from(_: ()) -> Self {
        Json::null()
    }
}

impl From<bool> for Json {
    fn from(b: bool) -> Self {
        Json::boolean(b)
    }
}

impl From<i32> for Json {
    fn from(n: i32) -> Self {
        Json::int(n)
    }
}

impl From<i8> for Json {
    fn from(n: i8) -> Self {
        Json::int(i32::from(n))
    }
}

impl From<i16> for Json {
    fn from(n: i16) -> Self {
        Json::int(i32::from(n))
    }
}

impl From<u8> for Json {
    fn from(n: u8) -> Self {
        Json::int(i32::from(n))
    }
}

impl From<u16> for Json {
    fn from(n: u16) -> Self {
        Json::int(i32::from(n))
    }
}

impl From<f64> for Json {
    fn from(d: f64) -> Self {
        Json::double(d)
    }
}

impl From<f32> for Json {
    fn from(d: f32) -> Self {
        Json::double(f64::from(d))
    }
}

impl From<Number> for Json {
    fn from(n: Number) -> Self {
        Json::from_node(Node::Number(n))
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Self {
        Json::string(s)
    }
}

impl From<String> for Json {
    fn from(s: String) -> Self {
        Json::string(s)
    }
}

impl From<&String> for Json {
    fn from(s: &String) -> Self {
        Json::string(s.as_str())
    }
}

impl From<Object> for Json {
    fn from(map: Object) -> Self {
        Json::from_node(Node::Object(map))
    }
}

impl From<&Object> for Json {
    fn from(map: &Object) -> Self {
        Json::from_node(Node::Object(map.clone()))
    }
}

impl From<Array> for Json {
    fn from(items: Array) -> Self {
        Json::from_node(Node::Array(items))
    }
}

impl From<&Array> for Json {
    fn from(items: &Array) -> Self {
        Json::from_node(Node::Array(items.clone()))
    }
}

impl FromIterator<Json> for Json {
    fn from_iter<I: IntoIterator<Item = Json>>(iter: I) -> Self {
        Json::from(iter.into_iter().collect::<Array>())
    }
}

impl<K: Into<String>> FromIterator<(K, Json)> for Json {
    fn from_iter<I: IntoIterator<Item = (K, Json)>>(iter: I) -> Self {
        Json::from(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect::<Object>(),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════
// TryFrom Trait Implementations (strict extraction)
// ═══════════════════════════════════════════════════════════════════

impl TryFrom<&Json> for bool {
    type Error = JsonError;

    fn try_from(value: &Json) -> Result<Self> {
        match value.node() {
            Node::Boolean(b) => Ok(*b),
            other => Err(JsonError::mismatch(JsonType::Boolean, other.kind())),
        }
    }
}

impl TryFrom<&Json> for i32 {
    type Error = JsonError;

    fn try_from(value: &Json) -> Result<Self> {
        value
            .as_number()
            .map(Number::as_int)
            .ok_or_else(|| JsonError::mismatch(JsonType::Number, value.value_type()))
    }
}

impl TryFrom<&Json> for f64 {
    type Error = JsonError;

    fn try_from(value: &Json) -> Result<Self> {
        value
            .as_number()
            .map(Number::as_double)
            .ok_or_else(|| JsonError::mismatch(JsonType::Number, value.value_type()))
    }
}

impl TryFrom<&Json> for String {
    type Error = JsonError;

    fn try_from(value: &Json) -> Result<Self> {
        match value.node() {
            Node::String(s) => Ok(s.clone()),
            other => Err(JsonError::mismatch(JsonType::String, other.kind())),
        }
    }
}

impl TryFrom<Json> for Object {
    type Error = JsonError;

    fn try_from(mut value: Json) -> Result<Self> {
        if !value.is_object() {
            return Err(JsonError::mismatch(JsonType::Object, value.value_type()));
        }
        match value.take_node().map(|node| *node) {
            Some(Node::Object(map)) => Ok(map),
            _ => Err(JsonError::mismatch(JsonType::Object, JsonType::Null)),
        }
    }
}

impl TryFrom<Json> for Array {
    type Error = JsonError;

    fn try_from(mut value: Json) -> Result<Self> {
        if !value.is_array() {
            return Err(JsonError::mismatch(JsonType::Array, value.value_type()));
        }
        match value.take_node().map(|node| *node) {
            Some(Node::Array(items)) => Ok(items),
            _ => Err(JsonError::mismatch(JsonType::Array, JsonType::Null)),
        }
    }
}
