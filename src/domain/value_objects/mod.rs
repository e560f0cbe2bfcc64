//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod id_set;
mod selection_state;
mod tree_id;

pub use id_set::{OpenSet, SelectionSet};
pub use selection_state::SelectionState;
pub use tree_id::TreeId;
