//! JSON Event Sink
//!
//! Outputs selection events as NDJSON for scripts and tooling.

use crate::domain::ports::{SelectionEvent, SelectionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stderr, leaving stdout for results
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SelectionEventSink for JsonEventSink {
    fn on_event(&self, event: SelectionEvent) {
        let json = match event {
            SelectionEvent::SelectionChanged {
                target,
                checked,
                selections,
            } => {
                serde_json::json!({
                    "event": "selection_changed",
                    "target": target,
                    "checked": checked,
                    "selections": selections,
                })
            }

            SelectionEvent::UnknownTarget { target } => {
                serde_json::json!({
                    "event": "unknown_target",
                    "target": target,
                })
            }

            SelectionEvent::OpenChanged { target, open } => {
                serde_json::json!({
                    "event": "open_changed",
                    "target": target,
                    "open": open,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
