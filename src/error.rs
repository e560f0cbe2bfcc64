//! Error types for Checktree
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Checktree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Main error type for Checktree operations
#[derive(Error, Debug)]
pub enum TreeError {
    /// Toggle target is not part of the tree (strict mode only)
    #[error("no node with tree id '{tree_id}'")]
    UnknownNode { tree_id: String },

    /// Tree id is not a dash-joined path of 1-based indices
    #[error("malformed tree id '{tree_id}' - expected a path like '1', '1-2' or '1-2-3'")]
    MalformedTreeId { tree_id: String },

    /// Tree id parses but does not match the node's position
    #[error("tree id '{found}' does not match its position in the tree (expected '{expected}')")]
    MisplacedTreeId { found: String, expected: String },

    /// Two nodes share a tree id
    #[error("duplicate tree id '{tree_id}'")]
    DuplicateTreeId { tree_id: String },

    /// Tree document extension is not recognised
    #[error("unsupported tree document '{file}' - use .json, .yaml, .yml or .toml")]
    UnsupportedDocument { file: PathBuf },

    /// Tree document failed to parse
    #[error("invalid tree document {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// Config file failed to parse
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
