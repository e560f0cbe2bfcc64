//! Checktree - hierarchical checkbox selection
//!
//! A tree of nodes is addressed by dash-path ids (`"1-2-3"`). The caller
//! keeps a compact selection set (a fully checked subtree is recorded by
//! its root only) and an open set; every operation takes those sets and
//! returns new ones.
//!
//! ```
//! use checktree::{SelectionSet, TreeModel, TreeNode};
//!
//! let model = TreeModel::new(&[
//!     TreeNode::new("a", "1", "A").with_children(vec![
//!         TreeNode::new("a1", "1-1", "A1"),
//!         TreeNode::new("a2", "1-2", "A2"),
//!     ]),
//!     TreeNode::new("b", "2", "B"),
//! ])?;
//!
//! let selections = model.toggle(&SelectionSet::new(), "1-1", true);
//! let selections = model.toggle(&selections, "1-2", true);
//! assert_eq!(selections, SelectionSet::parse_list("1"));
//! # Ok::<(), checktree::TreeError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{TreeModel, TreeNode};
pub use domain::services::{SelectionMode, TreeController, TreeState};
pub use domain::value_objects::{OpenSet, SelectionSet, SelectionState, TreeId};
pub use error::{TreeError, TreeResult};
