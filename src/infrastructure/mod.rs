//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (JSON, console)
//! - `document` - Tree document loading (JSON, YAML, TOML)

pub mod document;
pub mod events;

// Re-export for convenience
pub use document::{build_forest, load_document, parse_document, DocumentFormat, DocumentNode};
pub use events::{ConsoleEventSink, JsonEventSink};
