//! Toggle command handler
//!
//! Checks or unchecks one node and prints the new compact selection.
//! With `--json` the open set is echoed back alongside it.

use std::io;
use std::path::Path;

use anyhow::Result;

use checktree::domain::services::{SelectionMode, TreeController, TreeState};
use checktree::domain::value_objects::{OpenSet, SelectionSet};

use super::{load_model, Globals};
use crate::presentation::output::{write_state, OutputFormat};

pub struct ToggleArgs<'a> {
    pub tree: &'a Path,
    pub selections: &'a str,
    pub open: &'a str,
    pub target: &'a str,
    pub uncheck: bool,
    pub strict: bool,
}

pub fn cmd_toggle(globals: &Globals, args: ToggleArgs<'_>) -> Result<()> {
    let model = load_model(args.tree)?;

    let mode = if args.strict {
        SelectionMode::Strict
    } else {
        globals.config.selection.mode()
    };
    let controller = TreeController::new()
        .with_mode(mode)
        .with_event_sink(globals.event_sink());

    let state = TreeState::new(
        SelectionSet::parse_list(args.selections),
        OpenSet::parse_list(args.open),
    );
    let next = controller.toggle_checked(&model, &state, args.target, !args.uncheck)?;

    write_state(
        &mut io::stdout().lock(),
        OutputFormat::from_json_flag(globals.json),
        &next,
    )?;
    Ok(())
}
