//! Domain Entities
//!
//! - `TreeNode` - the nested, caller-owned shape of a tree
//! - `TreeModel` - a flat pre-order arena built from a forest of `TreeNode`s

mod tree_model;
mod tree_node;

pub use tree_model::{Node, NodeIndex, TreeModel};
pub use tree_node::TreeNode;
