//! Open/closed bookkeeping for the tree view.
//!
//! Independent of selection: nothing here reads or writes a `SelectionSet`.
//! Any number of nodes may be open at once.

use crate::domain::entities::TreeModel;
use crate::domain::value_objects::OpenSet;

/// Open `tree_id` if closed, close it if open
pub fn toggle_open(opens: &OpenSet, tree_id: &str) -> OpenSet {
    let mut next = opens.clone();
    if !next.remove(tree_id) {
        next.insert(tree_id);
    }
    next
}

/// Open every node that has children
pub fn open_all(model: &TreeModel) -> OpenSet {
    model
        .nodes()
        .iter()
        .filter(|node| !node.is_leaf())
        .map(|node| node.tree_id.as_str())
        .collect()
}

pub fn close_all() -> OpenSet {
    OpenSet::new()
}
