//! Value representation: the node hierarchy and the [`Json`] handle

mod display;
mod impls;
mod index;
mod node;
mod number;
mod shared;

pub use number::Number;

pub(crate) use node::Node;

use std::fmt;

use indexmap::IndexMap;

use crate::reclaim;

/// Object payload: string keys mapped to owned child handles.
///
/// Iteration follows insertion order; equality ignores it.
pub type Object = IndexMap<String, Json>;

/// Array payload: an ordered sequence of owned child handles.
pub type Array = Vec<Json>;

/// Discriminant of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Integer or floating point number
    Number,
    /// UTF-8 string
    String,
    /// Key/value mapping
    Object,
    /// Ordered sequence
    Array,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Object => "object",
            JsonType::Array => "array",
        };
        f.write_str(name)
    }
}

/// Where a handle's node lives.
pub(crate) enum Slot {
    /// One of the immortal shared leaves (null, `true`, `false`)
    Shared(&'static Node),

    /// A privately owned number, string, object or array node
    Owned(Box<Node>),
}

/// A JSON value handle.
///
/// A handle exclusively owns its node. Objects and arrays own their children,
/// so a tree never shares structure and cannot contain cycles. Cloning a
/// handle deep-clones the subtree; null and booleans are shared immutable
/// leaves and are handed out as-is.
///
/// Two behaviors are intentional and must not be "fixed":
/// - writing through [`Json::get_mut`] or [`Json::at_mut`] on a handle of the
///   wrong kind replaces it with an empty container, discarding the old value
/// - numbers compare by their double value, so `Json::from(1) == Json::from(1.0)`
///
/// Dropping a handle hands its owned node to the thread's [`reclaim`]er.
pub struct Json {
    pub(crate) slot: Slot,
}

impl Json {
    /// Wrap a node, routing null and booleans to the shared leaves.
    pub(crate) fn from_node(node: Node) -> Self {
        match node {
            Node::Null => Json::null(),
            Node::Boolean(b) => Json::boolean(b),
            other => Json {
                slot: Slot::Owned(Box::new(other)),
            },
        }
    }

    /// The node this handle points at.
    pub(crate) fn node(&self) -> &Node {
        match &self.slot {
            Slot::Shared(node) => node,
            Slot::Owned(node) => node.as_ref(),
        }
    }

    /// The owned node, if any. Shared leaves are immutable.
    pub(crate) fn node_mut(&mut self) -> Option<&mut Node> {
        match &mut self.slot {
            Slot::Shared(_) => None,
            Slot::Owned(node) => Some(node.as_mut()),
        }
    }

    /// Detach the owned node, leaving null behind.
    pub(crate) fn take_node(&mut self) -> Option<Box<Node>> {
        if let Slot::Shared(_) = self.slot {
            return None;
        }
        match std::mem::replace(&mut self.slot, shared::null_slot()) {
            Slot::Owned(node) => Some(node),
            Slot::Shared(_) => None,
        }
    }
}

impl Clone for Json {
    fn clone(&self) -> Self {
        match &self.slot {
            Slot::Shared(node) => Json {
                slot: Slot::Shared(*node),
            },
            Slot::Owned(node) => Json {
                slot: Slot::Owned(Box::new(node.deep_clone())),
            },
        }
    }
}

impl Drop for Json {
    fn drop(&mut self) {
        if let Some(node) = self.take_node() {
            reclaim::release(node);
        }
    }
}
