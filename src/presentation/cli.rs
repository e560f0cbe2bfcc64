//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all
//! subcommands. Id lists are comma separated tree ids (`1-1,2`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Checktree - hierarchical checkbox selection with compact selection sets
#[derive(Parser, Debug)]
#[command(name = "checktree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to .checktree.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree with checkbox states
    Show {
        /// Tree document (.json, .yaml, .yml, .toml)
        #[arg(short, long)]
        tree: PathBuf,

        /// Compact selection
        #[arg(short, long, default_value = "")]
        selections: String,

        /// Open nodes
        #[arg(short, long, default_value = "")]
        open: String,

        /// Open every node with children
        #[arg(long, conflicts_with = "open")]
        all_open: bool,
    },

    /// Print every effectively selected id
    Expand {
        /// Tree document (.json, .yaml, .yml, .toml)
        #[arg(short, long)]
        tree: PathBuf,

        /// Compact selection
        #[arg(short, long, default_value = "")]
        selections: String,
    },

    /// Check (or uncheck) a node and print the new compact selection
    Toggle {
        /// Tree document (.json, .yaml, .yml, .toml)
        #[arg(short, long)]
        tree: PathBuf,

        /// Compact selection
        #[arg(short, long, default_value = "")]
        selections: String,

        /// Open nodes (carried over unchanged)
        #[arg(short, long, default_value = "")]
        open: String,

        /// Tree id of the node to toggle
        #[arg(long)]
        target: String,

        /// Uncheck instead of check
        #[arg(long)]
        uncheck: bool,

        /// Fail if the target is not in the tree
        #[arg(long)]
        strict: bool,
    },

    /// Open or close a node and print the new open set
    Open {
        /// Open nodes
        #[arg(short, long, default_value = "")]
        open: String,

        /// Tree id of the node to open or close
        #[arg(long)]
        target: String,
    },

    /// Pick nodes interactively and print the final compact selection
    Pick {
        /// Tree document (.json, .yaml, .yml, .toml)
        #[arg(short, long)]
        tree: PathBuf,

        /// Initial compact selection
        #[arg(short, long, default_value = "")]
        selections: String,

        /// Initially open nodes
        #[arg(short, long, default_value = "")]
        open: String,
    },
}
