//! Composable structure predicates over finished trees.
//!
//! External consumers that map documents onto domain records never touch
//! the tokenizer or parser; they describe the shape they need as a
//! [`Structure`] built from per-node predicates and match it against a
//! [`Node`]. An [`ObjectStructure`] checks required and optional named
//! properties against per-property predicate lists; an [`ArrayStructure`]
//! checks every element against one predicate list.

use std::collections::HashMap;
use std::ops::AddAssign;

use crate::node::Node;

/// Returns true if the given node satisfies a certain condition.
pub type NodePredicate = Box<dyn Fn(&Node<'_>) -> bool>;

/// Abstract structure of a node.
pub trait Structure {
    /// True if `node` matches this structure.
    fn matches(&self, node: &Node<'_>) -> bool;
}

/// Minimal required structure of an object node.
///
/// Used to decide whether a node can be converted into a domain record. A
/// node matches when it is an object, every key it carries is a known
/// (required or optional) property, every required property is present and
/// satisfies its predicates, and every present optional property is either
/// null or satisfies its predicates. Unknown keys reject the node.
#[derive(Default)]
pub struct ObjectStructure {
    required: HashMap<String, Vec<NodePredicate>>,
    optional: HashMap<String, Vec<NodePredicate>>,
}

impl ObjectStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required property named `key`. A matching node must map `key`
    /// to a value satisfying every predicate in `predicates`.
    pub fn add_required_property(&mut self, key: impl Into<String>, predicates: Vec<NodePredicate>) {
        self.required.insert(key.into(), predicates);
    }

    /// Add an optional property named `key`. Nodes match if they lack
    /// `key`, map it to null, or map it to a value satisfying every
    /// predicate in `predicates`.
    pub fn add_optional_property(&mut self, key: impl Into<String>, predicates: Vec<NodePredicate>) {
        self.optional.insert(key.into(), predicates);
    }

    fn satisfies(node: &Node<'_>, predicates: &[NodePredicate]) -> bool {
        predicates.iter().all(|predicate| predicate(node))
    }
}

impl Structure for ObjectStructure {
    fn matches(&self, node: &Node<'_>) -> bool {
        let Some(map) = node.as_object() else {
            return false;
        };
        let mut required_found = 0;
        for (key, value) in map {
            if let Some(predicates) = self.required.get(*key) {
                if !Self::satisfies(value, predicates) {
                    return false;
                }
                required_found += 1;
            } else if let Some(predicates) = self.optional.get(*key) {
                if !value.is_null() && !Self::satisfies(value, predicates) {
                    return false;
                }
            } else {
                return false;
            }
        }
        required_found == self.required.len()
    }
}

/// Minimal required structure of an array node.
///
/// A node matches when it is an array and every element satisfies every
/// added predicate.
#[derive(Default)]
pub struct ArrayStructure {
    predicates: Vec<NodePredicate>,
}

impl ArrayStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `predicate` to the list every element must satisfy.
    pub fn add_predicate(&mut self, predicate: NodePredicate) {
        self.predicates.push(predicate);
    }
}

impl Structure for ArrayStructure {
    fn matches(&self, node: &Node<'_>) -> bool {
        let Some(items) = node.as_array() else {
            return false;
        };
        items
            .iter()
            .all(|item| self.predicates.iter().all(|predicate| predicate(item)))
    }
}

impl AddAssign<NodePredicate> for ArrayStructure {
    fn add_assign(&mut self, predicate: NodePredicate) {
        self.add_predicate(predicate);
    }
}

/// True if `node` is a non-empty string.
pub fn string_not_empty(node: &Node<'_>) -> bool {
    node.as_str().is_some_and(|s| !s.is_empty())
}
