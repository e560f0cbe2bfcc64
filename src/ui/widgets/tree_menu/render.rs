//! Terminal rendering functions for tree menu.
//!
//! This module provides functions to render tree rows, status bars,
//! and help text to strings for terminal output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::value_objects::SelectionState;
use crate::ui::theme::{icon, icons, icons_ascii};

use super::menu::FlattenedNode;

/// Render a single tree row to a string
pub fn render_tree_node(
    node: &FlattenedNode,
    is_active: bool,
    supports_unicode: bool,
    width: Option<usize>,
) -> String {
    let indent = "  ".repeat(node.depth);
    let cursor = if is_active {
        format!("{} ", icon(supports_unicode, icons::POINTER, icons_ascii::POINTER))
    } else {
        String::from("  ")
    };

    let state_icon = match node.state {
        SelectionState::Selected => icon(supports_unicode, icons::SELECTED, icons_ascii::SELECTED),
        SelectionState::Unselected => {
            icon(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
        }
        SelectionState::Partial => icon(supports_unicode, icons::PARTIAL, icons_ascii::PARTIAL),
    };

    // Expansion icon (only for nodes with children)
    let expand_icon = if !node.has_children {
        String::from("  ")
    } else if node.expanded {
        format!("{} ", icon(supports_unicode, icons::EXPAND, icons_ascii::EXPAND))
    } else {
        format!("{} ", icon(supports_unicode, icons::COLLAPSE, icons_ascii::COLLAPSE))
    };

    let count_suffix = if node.has_children {
        let noun = if node.leaf_count == 1 { "item" } else { "items" };
        format!(" ({} {})", node.leaf_count, noun)
    } else {
        String::new()
    };

    let prefix = format!("{}{}{}{} ", cursor, indent, expand_icon, state_icon);
    let label = match width {
        Some(width) => {
            let used = prefix.width() + count_suffix.width();
            truncate_to_width(&node.label, width.saturating_sub(used), supports_unicode)
        }
        None => node.label.clone(),
    };

    format!("{}{}{}", prefix, label, count_suffix)
}

/// Cut `text` to at most `max` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max: usize, supports_unicode: bool) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let ellipsis = icon(supports_unicode, icons::ELLIPSIS, icons_ascii::ELLIPSIS);
    let budget = max.saturating_sub(ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ellipsis);
    out
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, supports_unicode: bool) -> String {
    format!(
        "Selected: {}/{} items\n\n{} = selected    {} = partial    {} = not selected",
        selected,
        total,
        icon(supports_unicode, icons::SELECTED, icons_ascii::SELECTED),
        icon(supports_unicode, icons::PARTIAL, icons_ascii::PARTIAL),
        icon(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[a] All    [n] None    [i] Invert    [Enter] Confirm    [q] Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to open/close)",
    )
}
