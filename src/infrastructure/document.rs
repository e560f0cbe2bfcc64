//! Tree Documents
//!
//! Loads a forest of nodes from JSON, YAML or TOML. Documents list nodes as
//! `{ id, label?, tree_id?, children? }`, either as a bare list or under a
//! top-level `nodes` key (TOML always uses `[[nodes]]`).
//!
//! Tree ids are positional. Missing ones are filled in; supplied ones must
//! parse and must match the node's position.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::TreeId;
use crate::error::{TreeError, TreeResult};

/// A node as written in a tree document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentRoot {
    List(Vec<DocumentNode>),
    Table { nodes: Vec<DocumentNode> },
}

impl DocumentRoot {
    fn into_nodes(self) -> Vec<DocumentNode> {
        match self {
            DocumentRoot::List(nodes) | DocumentRoot::Table { nodes } => nodes,
        }
    }
}

/// Serialization format of a tree document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> TreeResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(TreeError::UnsupportedDocument {
                file: path.to_path_buf(),
            }),
        }
    }
}

/// Read and parse a tree document, choosing the format by extension
pub fn load_document(path: &Path) -> TreeResult<Vec<TreeNode>> {
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_document(&content, format, path)
}

/// Parse document text; `file` is only used in error messages
pub fn parse_document(content: &str, format: DocumentFormat, file: &Path) -> TreeResult<Vec<TreeNode>> {
    let invalid = |message: String| TreeError::InvalidDocument {
        file: file.to_path_buf(),
        message,
    };

    let root: DocumentRoot = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
        DocumentFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?
        }
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    build_forest(root.into_nodes())
}

/// Convert document nodes into `TreeNode`s with positional tree ids
pub fn build_forest(nodes: Vec<DocumentNode>) -> TreeResult<Vec<TreeNode>> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| build_node(node, TreeId::top_level(i + 1)))
        .collect()
}

fn build_node(node: DocumentNode, expected: TreeId) -> TreeResult<TreeNode> {
    if let Some(raw) = &node.tree_id {
        let found = TreeId::parse(raw)?;
        if found != expected {
            return Err(TreeError::MisplacedTreeId {
                found: raw.clone(),
                expected: expected.to_string(),
            });
        }
    }

    let children = node
        .children
        .into_iter()
        .enumerate()
        .map(|(i, child)| build_node(child, expected.child(i + 1)))
        .collect::<TreeResult<Vec<_>>>()?;

    let label = node.label.unwrap_or_else(|| node.id.clone());
    Ok(TreeNode::at(&expected, node.id, label).with_children(children))
}
