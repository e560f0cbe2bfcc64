//! Tree Menu Widget
//!
//! An interactive checkbox tree over a `TreeModel`. Selection and open state
//! live in a `TreeState`; every action replaces it through the
//! `TreeController`.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

// Re-export public API
pub use input::{key_to_action, run_interactive};
pub use menu::{FlattenedNode, TreeAction, TreeMenu};

pub use render::{render_help_bar, render_status_bar, render_tree_node, truncate_to_width};
