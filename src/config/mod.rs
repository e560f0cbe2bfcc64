//! Configuration module for Checktree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CHECKTREE_*)
//! 3. Project config (.checktree.toml)
//! 4. User config (~/.config/checktree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, IconMode, OutputConfig, SelectionConfig, Verbosity};
