//! The node hierarchy behind every handle
//!
//! Accessors suffixed `_unchecked` carry a precondition: the caller has
//! already confirmed the node's kind. A wrong call trips a debug assertion and
//! yields the kind's default value in release builds.

use super::shared::NULL;
use super::{Array, Json, JsonType, Number, Object};

/// A value node.
///
/// Null and boolean nodes only ever exist as the shared statics; handles own
/// every other kind exclusively.
#[derive(Debug)]
pub(crate) enum Node {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Object(Object),
    Array(Array),
}

impl Node {
    /// The node's discriminant
    pub(crate) fn kind(&self) -> JsonType {
        match self {
            Node::Null => JsonType::Null,
            Node::Boolean(_) => JsonType::Boolean,
            Node::Number(_) => JsonType::Number,
            Node::String(_) => JsonType::String,
            Node::Object(_) => JsonType::Object,
            Node::Array(_) => JsonType::Array,
        }
    }

    /// Independent copy of this node and everything below it.
    ///
    /// Shared leaves never reach this: handles clone them by pointer.
    pub(crate) fn deep_clone(&self) -> Node {
        match self {
            Node::Null => Node::Null,
            Node::Boolean(b) => Node::Boolean(*b),
            Node::Number(n) => Node::Number(*n),
            Node::String(s) => Node::String(s.clone()),
            Node::Object(map) => Node::Object(map.clone()),
            Node::Array(items) => Node::Array(items.clone()),
        }
    }

    /// Compare two nodes of the same kind.
    ///
    /// Null compares by identity: there is exactly one null node.
    pub(crate) fn equals(&self, other: &Node) -> bool {
        debug_assert_eq!(self.kind(), other.kind());
        match (self, other) {
            (Node::Null, Node::Null) => std::ptr::eq(self, other),
            (Node::Boolean(a), Node::Boolean(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Object(a), Node::Object(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => a == b,
            _ => false,
        }
    }

    pub(crate) fn bool_unchecked(&self) -> bool {
        debug_assert!(
            matches!(self, Node::Boolean(_)),
            "bool_unchecked on {} node",
            self.kind()
        );
        match self {
            Node::Boolean(b) => *b,
            _ => false,
        }
    }

    pub(crate) fn int_unchecked(&self) -> i32 {
        debug_assert!(
            matches!(self, Node::Number(_)),
            "int_unchecked on {} node",
            self.kind()
        );
        match self {
            Node::Number(n) => n.as_int(),
            _ => 0,
        }
    }

    pub(crate) fn double_unchecked(&self) -> f64 {
        debug_assert!(
            matches!(self, Node::Number(_)),
            "double_unchecked on {} node",
            self.kind()
        );
        match self {
            Node::Number(n) => n.as_double(),
            _ => 0.0,
        }
    }

    pub(crate) fn str_unchecked(&self) -> &str {
        debug_assert!(
            matches!(self, Node::String(_)),
            "str_unchecked on {} node",
            self.kind()
        );
        match self {
            Node::String(s) => s.as_str(),
            _ => "",
        }
    }

    /// Member lookup; a missing key yields the shared null handle
    pub(crate) fn key_unchecked(&self, key: &str) -> &Json {
        debug_assert!(
            matches!(self, Node::Object(_)),
            "key_unchecked on {} node",
            self.kind()
        );
        match self {
            Node::Object(map) => map.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Element lookup; an out-of-range index yields the shared null handle
    pub(crate) fn index_unchecked(&self, index: usize) -> &Json {
        debug_assert!(
            matches!(self, Node::Array(_)),
            "index_unchecked on {} node",
            self.kind()
        );
        match self {
            Node::Array(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}
