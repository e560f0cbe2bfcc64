//! Selection Service
//!
//! Converts between the two forms of a selection:
//!
//! - **compact**: a fully selected subtree is stored only as its root id
//! - **expanded**: every effectively selected id is listed
//!
//! A toggle always works on the expanded form and then compacts the whole
//! tree again, so ids implied by a selected ancestor need no special casing.
//! Inputs are never mutated; every operation returns a new set.

use crate::domain::entities::{Node, NodeIndex, TreeModel};
use crate::domain::value_objects::{SelectionSet, SelectionState};
use crate::error::{TreeError, TreeResult};

impl TreeModel {
    /// Expand a compact selection into every effectively selected id.
    ///
    /// Ids that do not resolve to a node are kept as-is; they disappear on
    /// the next compaction.
    pub fn expand(&self, selections: &SelectionSet) -> SelectionSet {
        let mut expanded = SelectionSet::new();
        for tree_id in selections {
            expanded.insert(tree_id.as_str());
            for descendant in self.find_all_descendants(self.get(tree_id)) {
                expanded.insert(descendant.tree_id.as_str());
            }
        }
        expanded
    }

    /// Reduce an expanded selection to its minimal compact form.
    ///
    /// Walks every subtree bottom-up. A node whose children are all selected
    /// replaces them in the output; otherwise its selected children are
    /// recorded individually. Top-level nodes sit under an implicit root that
    /// never collapses, so selected top-level nodes are always listed.
    pub fn compact(&self, expanded: &SelectionSet) -> SelectionSet {
        let mut expanded = expanded.clone();
        let mut compacted = SelectionSet::new();

        for root in self.roots() {
            self.update_parent_nodes(root.index(), &mut expanded, &mut compacted);
        }
        for root in self.roots() {
            if expanded.contains(&root.tree_id) {
                compacted.insert(root.tree_id.as_str());
            }
        }

        compacted
    }

    fn update_parent_nodes(
        &self,
        index: NodeIndex,
        expanded: &mut SelectionSet,
        compacted: &mut SelectionSet,
    ) {
        let node = self.node(index);
        if node.is_leaf() {
            return;
        }

        for &child in node.children() {
            self.update_parent_nodes(child, expanded, compacted);
        }

        let all_children_checked = self
            .children_of(node)
            .all(|child| expanded.contains(&child.tree_id));

        if all_children_checked {
            for child in self.children_of(node) {
                compacted.remove(&child.tree_id);
            }
            compacted.insert(node.tree_id.as_str());
            expanded.insert(node.tree_id.as_str());
        } else {
            expanded.remove(&node.tree_id);
            compacted.remove(&node.tree_id);
            for child in self.children_of(node) {
                if expanded.contains(&child.tree_id) {
                    compacted.insert(child.tree_id.as_str());
                }
            }
        }
    }

    /// Check or uncheck `target` together with its whole subtree.
    ///
    /// An unknown target leaves the expanded selection untouched; the result
    /// is still compacted, which drops ids no longer present in the tree.
    pub fn toggle(&self, selections: &SelectionSet, target: &str, checked: bool) -> SelectionSet {
        let mut expanded = self.expand(selections);

        if let Some(node) = self.get(target) {
            let subtree = std::iter::once(node).chain(self.find_all_descendants(Some(node)));
            for member in subtree {
                if checked {
                    expanded.insert(member.tree_id.as_str());
                } else {
                    expanded.remove(&member.tree_id);
                }
            }
        }

        self.compact(&expanded)
    }

    /// Like [`TreeModel::toggle`], but an unknown target is an error
    pub fn try_toggle(
        &self,
        selections: &SelectionSet,
        target: &str,
        checked: bool,
    ) -> TreeResult<SelectionSet> {
        if self.get(target).is_none() {
            return Err(TreeError::UnknownNode {
                tree_id: target.to_string(),
            });
        }
        Ok(self.toggle(selections, target, checked))
    }

    /// Checkbox state of `node` given an expanded selection
    pub fn selection_state(&self, expanded: &SelectionSet, node: &Node) -> SelectionState {
        if expanded.contains(&node.tree_id) {
            SelectionState::Selected
        } else if self
            .find_all_descendants(Some(node))
            .iter()
            .any(|d| expanded.contains(&d.tree_id))
        {
            SelectionState::Partial
        } else {
            SelectionState::Unselected
        }
    }

    /// Compact selection covering the whole tree
    pub fn select_all(&self) -> SelectionSet {
        self.roots().map(|root| root.tree_id.as_str()).collect()
    }

    /// Flip every leaf, then recompute the compact form
    pub fn invert(&self, selections: &SelectionSet) -> SelectionSet {
        let expanded = self.expand(selections);
        let inverted: SelectionSet = self
            .leaves()
            .filter(|leaf| !expanded.contains(&leaf.tree_id))
            .map(|leaf| leaf.tree_id.as_str())
            .collect();
        self.compact(&inverted)
    }

    /// Number of leaves effectively selected
    pub fn selected_leaf_count(&self, selections: &SelectionSet) -> usize {
        let expanded = self.expand(selections);
        self.leaves()
            .filter(|leaf| expanded.contains(&leaf.tree_id))
            .count()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}
