//! Shared immutable leaves: null, `true` and `false`
//!
//! Every handle holding one of these points at the same static node. They are
//! never cloned, mutated or freed.

use super::{Json, Node, Slot};

static NULL_NODE: Node = Node::Null;
static TRUE_NODE: Node = Node::Boolean(true);
static FALSE_NODE: Node = Node::Boolean(false);

/// The canonical null handle returned by lookups that miss.
pub(crate) static NULL: Json = Json {
    slot: Slot::Shared(&NULL_NODE),
};

pub(crate) fn null_slot() -> Slot {
    Slot::Shared(&NULL_NODE)
}

pub(crate) fn bool_slot(b: bool) -> Slot {
    if b {
        Slot::Shared(&TRUE_NODE)
    } else {
        Slot::Shared(&FALSE_NODE)
    }
}

impl Json {
    /// The null value
    pub fn null() -> Self {
        Json { slot: null_slot() }
    }

    /// A boolean value
    pub fn boolean(b: bool) -> Self {
        Json { slot: bool_slot(b) }
    }

    /// Check if this handle points at a shared leaf rather than an owned node
    pub fn is_shared(&self) -> bool {
        matches!(self.slot, Slot::Shared(_))
    }

    /// Check if two handles point at the same node
    pub fn ptr_eq(&self, other: &Json) -> bool {
        std::ptr::eq(self.node(), other.node())
    }
}
