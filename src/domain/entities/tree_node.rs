//! TreeNode Entity
//!
//! The nested representation callers build and hand to `TreeModel::new`.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TreeId;

/// A node in the tree structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Externally meaningful identifier
    pub id: String,
    /// Structural path (`"1"`, `"1-2"`, ...)
    pub tree_id: String,
    /// Display payload, never interpreted by the selection logic
    pub label: String,
    /// Child nodes (empty for leaf nodes)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a new childless node
    pub fn new(id: impl Into<String>, tree_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tree_id: tree_id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a childless node at the given structural position
    pub fn at(tree_id: &TreeId, id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, tree_id.to_string(), label)
    }

    /// Builder-style child list
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Count of nodes in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_len()).sum::<usize>()
    }
}
