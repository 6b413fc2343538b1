//! List command implementation

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::{json, table};

#[derive(Tabled)]
struct DeploymentRow {
    #[tabled(rename = "DEPLOYMENT")]
    name: String,
}

/// Run the list command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let dir = opts.deployments_dir()?;
    let names = dir.list()?;

    match opts.format {
        OutputFormat::Pretty => {
            if names.is_empty() {
                println!("No deployments defined in {}", dir.path().display());
                return Ok(());
            }
            println!("{}\n", "Deployments".bold());
            for name in &names {
                println!("  {}", name.cyan());
            }
        }
        OutputFormat::Table => {
            let rows: Vec<DeploymentRow> = names
                .into_iter()
                .map(|name| DeploymentRow { name })
                .collect();
            println!("{}", table::format_table(&rows, "No deployments defined."));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&names)?);
        }
    }

    Ok(())
}
