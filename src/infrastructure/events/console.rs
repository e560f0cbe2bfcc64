//! Console Event Sink
//!
//! Writes human-readable event lines, filtered by verbosity. Unknown targets
//! are shown at normal verbosity; every change is shown at `verbose`; the
//! resulting selection is included at `debug`.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{SelectionEvent, SelectionEventSink};

pub struct ConsoleEventSink {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

impl SelectionEventSink for ConsoleEventSink {
    fn on_event(&self, event: SelectionEvent) {
        let line = match event {
            SelectionEvent::UnknownTarget { target } if self.verbosity >= Verbosity::Normal => {
                format!("warning: no node with tree id '{}'", target)
            }
            SelectionEvent::SelectionChanged {
                target,
                checked,
                selections,
            } if self.verbosity >= Verbosity::Verbose => {
                let verb = if checked { "checked" } else { "unchecked" };
                if self.verbosity >= Verbosity::Debug {
                    format!("{} {} -> [{}]", verb, target, selections.join(", "))
                } else {
                    format!("{} {}", verb, target)
                }
            }
            SelectionEvent::OpenChanged { target, open } if self.verbosity >= Verbosity::Verbose => {
                format!("{} {}", if open { "opened" } else { "closed" }, target)
            }
            _ => return,
        };

        self.write_line(&line);
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Debug
    }
}
