//! Show command handler
//!
//! Renders the visible rows of the tree with their checkbox state.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use checktree::domain::services::{open_state, TreeController, TreeState};
use checktree::domain::value_objects::{OpenSet, SelectionSet};
use checktree::ui::terminal::detect_capabilities;
use checktree::ui::widgets::tree_menu::{render_tree_node, TreeMenu};

use super::{load_model, Globals};

pub fn cmd_show(
    globals: &Globals,
    tree: &Path,
    selections: &str,
    open: &str,
    all_open: bool,
) -> Result<()> {
    let model = load_model(tree)?;
    let opens = if all_open {
        open_state::open_all(&model)
    } else {
        OpenSet::parse_list(open)
    };
    let state = TreeState::new(SelectionSet::parse_list(selections), opens);
    let menu = TreeMenu::new(model, state, TreeController::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if globals.json {
        let output = serde_json::json!({
            "rows": menu.flattened_nodes(),
            "selected": menu.selected_count(),
            "total": menu.total_count(),
        });
        writeln!(out, "{}", output)?;
        return Ok(());
    }

    let caps = detect_capabilities();
    let width = caps.is_tty.then_some(usize::from(caps.width));
    let unicode = globals.unicode();
    for row in menu.flattened_nodes() {
        writeln!(out, "{}", render_tree_node(row, false, unicode, width))?;
    }
    Ok(())
}
