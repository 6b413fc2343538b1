//! Shared CLI argument types

use crate::cli::Cli;
use crate::config::DeploymentsDir;
use crate::error::Result;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Global CLI options passed to all command handlers
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom deployments directory
    pub path: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            path: cli.path.clone(),
        }
    }

    /// Deployments directory selected by `--path` or the default location
    pub fn deployments_dir(&self) -> Result<DeploymentsDir> {
        DeploymentsDir::resolve(self.path.as_deref())
    }
}
