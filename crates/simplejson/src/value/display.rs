//! Display and Debug implementations for Json
//!
//! The rendering is JSON-like but is not a serializer: strings use Rust
//! escaping and non-finite doubles print as `NaN`/`inf`.

use std::fmt;

use super::*;

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Null => write!(f, "null"),
            Node::Boolean(b) => write!(f, "{}", b),
            Node::Number(Number::Int(n)) => write!(f, "{}", n),
            // `{:?}` keeps the fraction, so 1.0 stays distinct from 1
            Node::Number(Number::Double(d)) => write!(f, "{:?}", d),
            Node::String(s) => write!(f, "{:?}", s),

            Node::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", k, v)?;
                }
                write!(f, "}}")
            }

            Node::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::String(s) => write!(f, "{}", s), // No quotes for Display
            _ => fmt::Debug::fmt(self, f),
        }
    }
}
