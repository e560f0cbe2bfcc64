//! Checktree CLI - hierarchical checkbox selection
//!
//! Usage: checktree <COMMAND>
//!
//! Commands:
//!   show    Render the tree with checkbox states
//!   expand  Print every effectively selected id
//!   toggle  Check or uncheck a node
//!   open    Open or close a node
//!   pick    Pick nodes interactively

mod commands;
mod presentation;

use anyhow::Result;
use clap::Parser;

use commands::Globals;
use presentation::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let globals = Globals::from_cli(&cli)?;

    match cli.command {
        Commands::Show {
            tree,
            selections,
            open,
            all_open,
        } => commands::cmd_show(&globals, &tree, &selections, &open, all_open),
        Commands::Expand { tree, selections } => {
            commands::cmd_expand(&globals, &tree, &selections)
        }
        Commands::Toggle {
            tree,
            selections,
            open,
            target,
            uncheck,
            strict,
        } => commands::cmd_toggle(
            &globals,
            commands::ToggleArgs {
                tree: &tree,
                selections: &selections,
                open: &open,
                target: &target,
                uncheck,
                strict,
            },
        ),
        Commands::Open { open, target } => commands::cmd_open(&globals, &open, &target),
        Commands::Pick {
            tree,
            selections,
            open,
        } => commands::cmd_pick(&globals, &tree, &selections, &open),
    }
}
