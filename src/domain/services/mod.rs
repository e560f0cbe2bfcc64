//! Domain Services
//!
//! - `selection` - expansion, compaction and toggling (methods on `TreeModel`)
//! - `open_state` - open/closed set updates
//! - `tree_controller` - applies view events to a `TreeState`

pub mod open_state;
mod selection;
mod tree_controller;

pub use tree_controller::{SelectionMode, TreeController, TreeState};
