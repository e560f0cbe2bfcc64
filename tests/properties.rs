//! Property tests for Checktree.
//!
//! Random forests are generated from parent-index vectors so every shape
//! (deep chains, wide fans, many top-level leaves) shows up.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/forest.rs"]
mod forest;

#[path = "properties/compaction.rs"]
mod compaction;

#[path = "properties/toggle.rs"]
mod toggle;
