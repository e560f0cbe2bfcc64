//! Presentation Layer
//!
//! - `cli` - clap argument definitions
//! - `output` - text / JSON rendering of command results

pub mod cli;
pub mod output;
