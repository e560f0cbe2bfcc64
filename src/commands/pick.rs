//! Pick command handler
//!
//! Runs the interactive tree menu. Events are discarded while the
//! terminal is in raw mode.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use checktree::domain::services::{TreeController, TreeState};
use checktree::domain::value_objects::{OpenSet, SelectionSet};
use checktree::ui::terminal::detect_capabilities;
use checktree::ui::widgets::tree_menu::{run_interactive, TreeMenu};

use super::{load_model, Globals};
use crate::presentation::output::{write_ids, OutputFormat};

pub fn cmd_pick(globals: &Globals, tree: &Path, selections: &str, open: &str) -> Result<()> {
    if !detect_capabilities().is_tty {
        bail!("pick needs an interactive terminal; use `toggle` in scripts");
    }

    let model = load_model(tree)?;
    let controller = TreeController::new().with_mode(globals.config.selection.mode());
    let state = TreeState::new(SelectionSet::parse_list(selections), OpenSet::parse_list(open));
    let mut menu = TreeMenu::new(model, state, controller);

    let picked = run_interactive(&mut menu, globals.unicode()).context("Terminal error")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match picked {
        Some(selections) => write_ids(
            &mut out,
            OutputFormat::from_json_flag(globals.json),
            "selections",
            &selections,
        )?,
        None if globals.json => writeln!(out, "{}", serde_json::json!({ "cancelled": true }))?,
        None => {}
    }
    Ok(())
}
