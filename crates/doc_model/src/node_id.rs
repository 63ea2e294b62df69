//! Identifiers for lists and the containers that own them

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a list or of the container a list is nested in
///
/// A nested list is owned by value inside its parent's entries, so it cannot
/// also hold a reference back up the tree. It records the parent's id instead;
/// the id survives the parent being moved or cloned, and callers holding the
/// tree can look the parent up when they need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a fresh id, distinct from every other list's
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
