//! Selection Event Port
//!
//! Provides an observable interface for controller operations.
//! Enables verbose console output, JSON event streams, and debugging.

/// Event emitted by the tree controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A node was checked or unchecked
    SelectionChanged {
        target: String,
        checked: bool,
        selections: Vec<String>,
    },

    /// A toggle named a node that is not in the tree
    UnknownTarget { target: String },

    /// A node was opened or closed
    OpenChanged { target: String, open: bool },
}

/// Trait for receiving selection events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: Silent operation
pub trait SelectionEventSink: Send + Sync {
    /// Handle a selection event
    fn on_event(&self, event: SelectionEvent);

    /// Check if this sink wants the full selection payload
    ///
    /// Sinks that only log what happened can skip building it.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SelectionEventSink for NoopEventSink {
    fn on_event(&self, _event: SelectionEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
