//! Open command handler

use std::io;

use anyhow::Result;

use checktree::domain::services::{TreeController, TreeState};
use checktree::domain::value_objects::{OpenSet, SelectionSet};

use super::Globals;
use crate::presentation::output::{write_ids, OutputFormat};

/// Flip `target` in the open set and print the result
pub fn cmd_open(globals: &Globals, open: &str, target: &str) -> Result<()> {
    let controller = TreeController::new().with_event_sink(globals.event_sink());
    let state = TreeState::new(SelectionSet::new(), OpenSet::parse_list(open));
    let next = controller.toggle_open(&state, target);

    write_ids(
        &mut io::stdout().lock(),
        OutputFormat::from_json_flag(globals.json),
        "opens",
        &next.opens,
    )?;
    Ok(())
}
