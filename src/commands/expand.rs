//! Expand command handler

use std::io;
use std::path::Path;

use anyhow::Result;

use checktree::domain::value_objects::SelectionSet;

use super::{load_model, Globals};
use crate::presentation::output::{write_ids, OutputFormat};

/// Print every id the compact selection implies
pub fn cmd_expand(globals: &Globals, tree: &Path, selections: &str) -> Result<()> {
    let model = load_model(tree)?;
    let expanded = model.expand(&SelectionSet::parse_list(selections));

    write_ids(
        &mut io::stdout().lock(),
        OutputFormat::from_json_flag(globals.json),
        "selections",
        &expanded,
    )?;
    Ok(())
}
