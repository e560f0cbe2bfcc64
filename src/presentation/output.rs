//! Output Rendering
//!
//! Command results are id sets. Text output prints one id per line, in
//! tree order; JSON output wraps them in an object keyed by what they are.

use std::io::{self, Write};

use checktree::domain::services::TreeState;
use checktree::domain::value_objects::TreeId;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Sort ids the way they appear in the tree; unparseable ids go last
pub fn tree_order<'a>(ids: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    let mut ids: Vec<&str> = ids.into_iter().map(String::as_str).collect();
    ids.sort_by_cached_key(|id| match TreeId::parse(id) {
        Ok(tree_id) => (0, Some(tree_id), String::new()),
        Err(_) => (1, None, id.to_string()),
    });
    ids
}

/// Write an id set under `key` (`selections`, `opens`, ...)
pub fn write_ids<'a>(
    out: &mut impl Write,
    format: OutputFormat,
    key: &str,
    ids: impl IntoIterator<Item = &'a String>,
) -> io::Result<()> {
    let ids = tree_order(ids);
    match format {
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(key.to_string(), serde_json::json!(ids));
            writeln!(out, "{}", serde_json::Value::Object(object))
        }
        OutputFormat::Text => {
            for id in ids {
                writeln!(out, "{}", id)?;
            }
            Ok(())
        }
    }
}

/// Write a whole `TreeState`.
///
/// Text output lists the selections only; JSON carries both sets.
pub fn write_state(out: &mut impl Write, format: OutputFormat, state: &TreeState) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "selections": tree_order(&state.selections),
                "opens": tree_order(&state.opens),
            });
            writeln!(out, "{}", output)
        }
        OutputFormat::Text => write_ids(out, format, "selections", &state.selections),
    }
}
