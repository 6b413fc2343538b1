//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod describe;
pub mod list;

pub use args::{GlobalOptions, OutputFormat};

/// Surf - describe deployments of applications to nodes
#[derive(Parser, Debug)]
#[command(name = "surf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding deployment definitions (defaults to ~/.surf/deployments)
    #[arg(long, global = true, env = "SURF_DEPLOYMENTS_PATH", hide_env = true)]
    pub path: Option<String>,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SURF_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true, env = "SURF_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the defined deployments
    List,

    /// Show the nodes, applications and tasks of a deployment
    Describe {
        /// Deployment name
        deployment: String,
    },

    /// Display version information
    Version,
}
