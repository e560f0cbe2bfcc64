//! Domain Ports
//!
//! Interfaces the domain layer depends on; implementations live in
//! `infrastructure`.

mod selection_events;

pub use selection_events::{NoopEventSink, SelectionEvent, SelectionEventSink};
