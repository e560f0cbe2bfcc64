//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::SelectionMode;
use crate::error::TreeResult;

use super::loader::{self, ConfigWarning};

/// Selection behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionConfig {
    /// Treat unknown toggle targets as errors
    #[serde(default)]
    pub strict: bool,
}

impl SelectionConfig {
    pub fn mode(&self) -> SelectionMode {
        if self.strict {
            SelectionMode::Strict
        } else {
            SelectionMode::Lenient
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub icons: IconMode,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by the number of `-v` flags, never lowering it
    pub fn bumped(self, count: u8) -> Self {
        let raised = match count {
            0 => self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(raised)
    }
}

/// Icon set used when rendering the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Unicode when the terminal supports it
    #[default]
    Auto,
    Unicode,
    Ascii,
}

impl IconMode {
    pub fn use_unicode(self, terminal_supports_unicode: bool) -> bool {
        match self {
            IconMode::Auto => terminal_supports_unicode,
            IconMode::Unicode => true,
            IconMode::Ascii => false,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CHECKTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
