//! Domain Layer
//!
//! The selection-tree core: pure data and algorithms without I/O.
//!
//! ## Structure
//!
//! - `entities/` - The caller-facing `TreeNode` and the arena-backed `TreeModel`
//! - `value_objects/` - Immutable value types (`TreeId`, id sets, `SelectionState`)
//! - `services/` - Selection expansion/compaction, open state, the controller
//! - `ports/` - Interface definitions for infrastructure (event sinks)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal directly
//! 2. **Value semantics** - Every operation takes sets by reference and returns new ones
//! 3. **Ports & Adapters** - Observability goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
