//! Event Sink Implementations
//!
//! Provides concrete implementations of SelectionEventSink:
//! - JsonEventSink: NDJSON output for scripts
//! - ConsoleEventSink: Human-readable lines, gated by verbosity

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
