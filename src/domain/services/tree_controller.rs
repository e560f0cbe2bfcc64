//! Tree Controller
//!
//! Receives check/open toggles from the view, asks the `TreeModel` for the
//! new compact selection and hands back a fresh `TreeState`. The state passed
//! in is never modified; callers keep (or drop) the previous value as they
//! see fit.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::TreeModel;
use crate::domain::ports::{NoopEventSink, SelectionEvent, SelectionEventSink};
use crate::domain::services::open_state;
use crate::domain::value_objects::{OpenSet, SelectionSet};
use crate::error::TreeResult;

/// How unknown toggle targets are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Unknown targets are a no-op (default)
    #[default]
    Lenient,
    /// Unknown targets return `TreeError::UnknownNode`
    Strict,
}

/// Caller-owned view state: the compact selection plus the open nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    #[serde(default)]
    pub selections: SelectionSet,
    #[serde(default)]
    pub opens: OpenSet,
}

impl TreeState {
    pub fn new(selections: SelectionSet, opens: OpenSet) -> Self {
        Self { selections, opens }
    }
}

/// Applies user toggles to a `TreeState`
pub struct TreeController {
    mode: SelectionMode,
    event_sink: Arc<dyn SelectionEventSink>,
}

impl Default for TreeController {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeController {
    /// Lenient controller that reports to nobody
    pub fn new() -> Self {
        Self {
            mode: SelectionMode::default(),
            event_sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn SelectionEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Check or uncheck `target` and its subtree.
    ///
    /// The open set is carried over unchanged. In strict mode an unknown
    /// target is an error; otherwise it only emits `UnknownTarget`.
    pub fn toggle_checked(
        &self,
        model: &TreeModel,
        state: &TreeState,
        target: &str,
        checked: bool,
    ) -> TreeResult<TreeState> {
        if model.get(target).is_none() {
            self.event_sink.on_event(SelectionEvent::UnknownTarget {
                target: target.to_string(),
            });
        }

        let selections = match self.mode {
            SelectionMode::Strict => model.try_toggle(&state.selections, target, checked)?,
            SelectionMode::Lenient => model.toggle(&state.selections, target, checked),
        };

        let payload = if self.event_sink.wants_detailed_events() {
            selections.to_vec()
        } else {
            Vec::new()
        };
        self.event_sink.on_event(SelectionEvent::SelectionChanged {
            target: target.to_string(),
            checked,
            selections: payload,
        });

        Ok(TreeState::new(selections, state.opens.clone()))
    }

    /// Open or close `target`; the selection is carried over unchanged
    pub fn toggle_open(&self, state: &TreeState, target: &str) -> TreeState {
        let opens = open_state::toggle_open(&state.opens, target);
        self.event_sink.on_event(SelectionEvent::OpenChanged {
            target: target.to_string(),
            open: opens.contains(target),
        });

        TreeState::new(state.selections.clone(), opens)
    }
}
