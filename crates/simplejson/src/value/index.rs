//! Key and index access with auto-vivification
//!
//! Reads never mutate: a miss, or a handle of the wrong kind, yields the
//! shared null handle. Writes create what is missing. Writing by key into a
//! non-object, or by index into a non-array, first replaces the handle with
//! an empty container of the right kind and the previous value is dropped.
//! Callers rely on that replacement; it is not an error path.

use std::ops::{Index, IndexMut};

use super::shared::NULL;
use super::{Json, Node, Object};

impl Json {
    /// Member `key` of an object, or null.
    pub fn get(&self, key: &str) -> &Json {
        if !self.is_object() {
            return &NULL;
        }
        self.node().key_unchecked(key)
    }

    /// Element `index` of an array, or null.
    pub fn at(&self, index: usize) -> &Json {
        if !self.is_array() {
            return &NULL;
        }
        self.node().index_unchecked(index)
    }

    /// Mutable member `key`, inserting null if absent.
    ///
    /// A handle that is not an object becomes an empty object first.
    pub fn get_mut(&mut self, key: &str) -> &mut Json {
        if !self.is_object() {
            *self = Json::from(Object::new());
        }
        match self.node_mut() {
            Some(Node::Object(map)) => map.entry(key.to_owned()).or_default(),
            _ => unreachable!("handle was promoted to an object"),
        }
    }

    /// Mutable element `index`, padding the array with nulls up to it.
    ///
    /// A handle that is not an array becomes an array of `index + 1` nulls.
    ///
    /// # Panics
    ///
    /// Panics if `index` is `usize::MAX`, since the array would need more
    /// than `usize::MAX` slots. Large indices can also exhaust memory, as
    /// with [`Vec::resize`].
    pub fn at_mut(&mut self, index: usize) -> &mut Json {
        let Some(len) = index.checked_add(1) else {
            panic!("array index {index} leaves no room for the slot");
        };
        if !self.is_array() {
            *self = Json::from(vec![Json::null(); len]);
        }
        match self.node_mut() {
            Some(Node::Array(items)) => {
                if items.len() < len {
                    items.resize_with(len, Json::null);
                }
                &mut items[index]
            }
            _ => unreachable!("handle was promoted to an array"),
        }
    }
}

impl Index<&str> for Json {
    type Output = Json;

    fn index(&self, key: &str) -> &Json {
        self.get(key)
    }
}

impl IndexMut<&str> for Json {
    fn index_mut(&mut self, key: &str) -> &mut Json {
        self.get_mut(key)
    }
}

impl Index<usize> for Json {
    type Output = Json;

    fn index(&self, index: usize) -> &Json {
        self.at(index)
    }
}

impl IndexMut<usize> for Json {
    fn index_mut(&mut self, index: usize) -> &mut Json {
        self.at_mut(index)
    }
}
