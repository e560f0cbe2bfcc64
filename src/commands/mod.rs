//! Command handlers
//!
//! Each subcommand lives in its own file and returns `anyhow::Result<()>`.
//! Shared setup (config, event sink, document loading) is kept here.

mod expand;
mod open;
mod pick;
mod show;
mod toggle;

pub use expand::cmd_expand;
pub use open::cmd_open;
pub use pick::cmd_pick;
pub use show::cmd_show;
pub use toggle::{cmd_toggle, ToggleArgs};

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use checktree::config::{Config, Verbosity};
use checktree::domain::entities::TreeModel;
use checktree::domain::ports::SelectionEventSink;
use checktree::infrastructure::{load_document, ConsoleEventSink, JsonEventSink};
use checktree::ui::terminal::detect_capabilities;

use crate::presentation::cli::Cli;

/// Global options shared by every command
pub struct Globals {
    pub json: bool,
    pub verbosity: Verbosity,
    pub config: Config,
}

impl Globals {
    /// Resolve config and verbosity from the parsed CLI
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                for warning in warnings {
                    let location = match warning.line {
                        Some(line) => format!("{}:{}", warning.file.display(), line),
                        None => warning.file.display().to_string(),
                    };
                    match warning.suggestion {
                        Some(suggestion) => eprintln!(
                            "warning: unknown config key '{}' in {} (did you mean '{}'?)",
                            warning.key, location, suggestion
                        ),
                        None => eprintln!(
                            "warning: unknown config key '{}' in {}",
                            warning.key, location
                        ),
                    }
                }
                config.with_env_overrides()
            }
            None => {
                let cwd = std::env::current_dir().ok();
                Config::load_or_default(cwd.as_deref())
            }
        };

        let verbosity = config.output.verbosity.bumped(cli.verbose);
        Ok(Self {
            json: cli.json,
            verbosity,
            config,
        })
    }

    /// JSON events on stderr with `--json`, readable lines otherwise
    pub fn event_sink(&self) -> Arc<dyn SelectionEventSink> {
        if self.json {
            Arc::new(JsonEventSink::stderr())
        } else {
            Arc::new(ConsoleEventSink::stderr(self.verbosity))
        }
    }

    /// Whether to draw unicode icons
    pub fn unicode(&self) -> bool {
        self.config
            .output
            .icons
            .use_unicode(detect_capabilities().supports_unicode)
    }
}

/// Load a tree document and index it
pub fn load_model(path: &Path) -> Result<TreeModel> {
    let forest = load_document(path)
        .with_context(|| format!("Failed to load tree document {}", path.display()))?;
    let model = TreeModel::new(&forest)
        .with_context(|| format!("Invalid tree in {}", path.display()))?;
    Ok(model)
}
