//! TreeModel Entity
//!
//! Flattens a forest of `TreeNode`s into an arena stored in pre-order. Every
//! entry records its parent, its children and the exclusive end of its
//! subtree, so the descendants of a node are always the contiguous slice
//! that follows it. Relationships come from the actual nesting; `tree_id`
//! strings are only used as lookup keys.

use std::collections::HashMap;

use crate::domain::entities::TreeNode;
use crate::error::{TreeError, TreeResult};

/// Position of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

/// A node stored in the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub tree_id: String,
    pub label: String,
    index: NodeIndex,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
    depth: usize,
    /// Exclusive end of this subtree in the arena
    end: usize,
}

impl Node {
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Depth level (0 = top level)
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Read-only, arena-backed view of a tree
#[derive(Debug, Clone, Default)]
pub struct TreeModel {
    nodes: Vec<Node>,
    roots: Vec<NodeIndex>,
    by_tree_id: HashMap<String, NodeIndex>,
}

impl TreeModel {
    /// Build the arena from top-level nodes, rejecting duplicate tree ids
    pub fn new(roots: &[TreeNode]) -> TreeResult<Self> {
        let capacity = roots.iter().map(TreeNode::subtree_len).sum();
        let mut model = Self {
            nodes: Vec::with_capacity(capacity),
            roots: Vec::with_capacity(roots.len()),
            by_tree_id: HashMap::with_capacity(capacity),
        };

        for root in roots {
            let index = model.push_subtree(root, None, 0)?;
            model.roots.push(index);
        }

        Ok(model)
    }

    fn push_subtree(
        &mut self,
        node: &TreeNode,
        parent: Option<NodeIndex>,
        depth: usize,
    ) -> TreeResult<NodeIndex> {
        let index = NodeIndex(self.nodes.len());
        if self.by_tree_id.insert(node.tree_id.clone(), index).is_some() {
            return Err(TreeError::DuplicateTreeId {
                tree_id: node.tree_id.clone(),
            });
        }

        self.nodes.push(Node {
            id: node.id.clone(),
            tree_id: node.tree_id.clone(),
            label: node.label.clone(),
            index,
            parent,
            children: Vec::with_capacity(node.children.len()),
            depth,
            end: index.0 + 1,
        });

        for child in &node.children {
            let child_index = self.push_subtree(child, Some(index), depth + 1)?;
            self.nodes[index.0].children.push(child_index);
        }
        self.nodes[index.0].end = self.nodes.len();

        Ok(index)
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Top-level nodes in sibling order
    pub fn roots(&self) -> impl Iterator<Item = &Node> + '_ {
        self.roots.iter().map(|&index| self.node(index))
    }

    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }

    /// Look up a node by tree id
    pub fn get(&self, tree_id: &str) -> Option<&Node> {
        self.by_tree_id.get(tree_id).map(|&index| self.node(index))
    }

    /// Direct children of `node` in sibling order
    pub fn children_of<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().map(move |&index| self.node(index))
    }

    pub fn parent_of(&self, node: &Node) -> Option<&Node> {
        node.parent.map(|index| self.node(index))
    }

    /// Depth-first pre-order search; returns the first node matching `predicate`
    pub fn find_node(&self, mut predicate: impl FnMut(&Node) -> bool) -> Option<&Node> {
        self.nodes.iter().find(|node| predicate(node))
    }

    /// Every descendant of `node` in pre-order, excluding `node` itself.
    ///
    /// Empty for `None`, for leaves and for nodes that belong to another model.
    pub fn find_all_descendants(&self, node: Option<&Node>) -> &[Node] {
        let Some(node) = node else {
            return &[];
        };
        match self.nodes.get(node.index.0) {
            Some(own) if own == node => &self.nodes[node.index.0 + 1..node.end],
            _ => &[],
        }
    }

    /// Leaf nodes in pre-order
    pub fn leaves(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.is_leaf())
    }
}
