//! Checkbox state of a single node, derived from an expanded selection set.

use serde::{Deserialize, Serialize};

/// Selection state for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// The node and its whole subtree are selected (●)
    Selected,
    /// Nothing in the subtree is selected (○)
    Unselected,
    /// Some but not all descendants are selected (◐)
    Partial,
}
