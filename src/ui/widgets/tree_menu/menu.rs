//! TreeMenu state management and action handling.

use serde::Serialize;

use crate::domain::entities::{Node, TreeModel};
use crate::domain::services::{TreeController, TreeState};
use crate::domain::value_objects::{SelectionSet, SelectionState};

use super::{render_help_bar, render_status_bar, render_tree_node};

/// A visible row of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedNode {
    pub tree_id: String,
    /// Depth level (0 = top level)
    pub depth: usize,
    pub label: String,
    pub state: SelectionState,
    /// Whether this node is open (for non-leaves)
    pub expanded: bool,
    pub has_children: bool,
    /// Leaf count for this subtree
    pub leaf_count: usize,
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle selection
    Toggle,
    /// Open node
    Expand,
    /// Close node, or jump to the parent of a closed one
    Collapse,
    /// Select all
    SelectAll,
    /// Select none
    SelectNone,
    /// Invert selection
    Invert,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive tree menu for selecting nodes
pub struct TreeMenu {
    model: TreeModel,
    controller: TreeController,
    state: TreeState,
    /// Current cursor position in flattened view
    cursor: usize,
    flattened: Vec<FlattenedNode>,
}

impl TreeMenu {
    pub fn new(model: TreeModel, state: TreeState, controller: TreeController) -> Self {
        let mut menu = Self {
            model,
            controller,
            state,
            cursor: 0,
            flattened: Vec::new(),
        };
        menu.rebuild_flattened();
        menu
    }

    /// Rebuild the visible rows from the current state
    pub fn rebuild_flattened(&mut self) {
        let expanded = self.model.expand(&self.state.selections);
        let mut rows = Vec::new();
        for root in self.model.roots() {
            self.flatten_node(root, &expanded, &mut rows);
        }
        self.flattened = rows;

        if !self.flattened.is_empty() && self.cursor >= self.flattened.len() {
            self.cursor = self.flattened.len() - 1;
        }
    }

    fn flatten_node(&self, node: &Node, expanded: &SelectionSet, rows: &mut Vec<FlattenedNode>) {
        let is_open = !node.is_leaf() && self.state.opens.contains(&node.tree_id);
        let leaf_count = if node.is_leaf() {
            1
        } else {
            self.model
                .find_all_descendants(Some(node))
                .iter()
                .filter(|d| d.is_leaf())
                .count()
        };

        rows.push(FlattenedNode {
            tree_id: node.tree_id.clone(),
            depth: node.depth(),
            label: node.label.clone(),
            state: self.model.selection_state(expanded, node),
            expanded: is_open,
            has_children: !node.is_leaf(),
            leaf_count,
        });

        if is_open {
            for child in self.model.children_of(node) {
                self.flatten_node(child, expanded, rows);
            }
        }
    }

    pub fn flattened_nodes(&self) -> &[FlattenedNode] {
        &self.flattened
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> &TreeState {
        &self.state
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.state.selections
    }

    /// Handle a tree action; returns `true` when the menu should close
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.flattened.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Toggle => {
                if let Some(row) = self.flattened.get(self.cursor) {
                    let checked = row.state != SelectionState::Selected;
                    let target = row.tree_id.clone();
                    // Rows are built from the model, so the target always
                    // resolves and strict mode cannot reject it.
                    if let Ok(next) =
                        self.controller
                            .toggle_checked(&self.model, &self.state, &target, checked)
                    {
                        self.state = next;
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Expand => {
                if let Some(row) = self.flattened.get(self.cursor) {
                    if row.has_children && !row.expanded {
                        self.state = self.controller.toggle_open(&self.state, &row.tree_id);
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Collapse => {
                self.collapse_at_cursor();
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectAll => {
                self.state.selections = self.model.select_all();
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectNone => {
                self.state.selections = SelectionSet::new();
                self.rebuild_flattened();
                false
            }
            TreeAction::Invert => {
                self.state.selections = self.model.invert(&self.state.selections);
                self.rebuild_flattened();
                false
            }
            TreeAction::Confirm => true,
            TreeAction::Quit => true,
        }
    }

    fn collapse_at_cursor(&mut self) {
        let Some(row) = self.flattened.get(self.cursor) else {
            return;
        };

        if row.expanded {
            self.state = self.controller.toggle_open(&self.state, &row.tree_id);
            return;
        }

        let parent_id = self
            .model
            .get(&row.tree_id)
            .and_then(|node| self.model.parent_of(node))
            .map(|parent| parent.tree_id.clone());
        if let Some(parent_id) = parent_id {
            if let Some(pos) = self.flattened.iter().position(|r| r.tree_id == parent_id) {
                self.cursor = pos;
            }
        }
    }

    /// Number of selected leaves
    pub fn selected_count(&self) -> usize {
        self.model.selected_leaf_count(&self.state.selections)
    }

    /// Number of leaves
    pub fn total_count(&self) -> usize {
        self.model.leaf_count()
    }

    /// Render the visible rows, truncating labels to `width` columns if given
    pub fn render(&self, supports_unicode: bool, width: Option<usize>) -> String {
        let mut out = String::new();

        for (i, node) in self.flattened.iter().enumerate() {
            let line = render_tree_node(node, i == self.cursor, supports_unicode, width);
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    pub fn render_status_bar(&self, supports_unicode: bool) -> String {
        render_status_bar(self.selected_count(), self.total_count(), supports_unicode)
    }

    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}
