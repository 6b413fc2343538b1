//! Describe command implementation

use colored::Colorize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::domain::{Deployment, Workflow};
use crate::error::Result;
use crate::models::display::{NOT_SET, format_option_value};
use crate::models::{ApplicationDisplay, DeploymentSummary, NodeDisplay, TaskDisplay};
use crate::output::{json, table};

/// Run the describe command for one deployment
pub fn run(opts: &GlobalOptions, name: &str) -> Result<()> {
    let deployment = opts.deployments_dir()?.load(name)?;
    log::info!("Describing deployment {}", deployment.name());

    match opts.format {
        OutputFormat::Pretty => print_pretty(&deployment),
        OutputFormat::Table => print_tables(&deployment),
        OutputFormat::Json => {
            let summary = DeploymentSummary::from(&deployment);
            println!("{}", json::format_json(&summary)?);
        }
    }

    Ok(())
}

fn print_tables(deployment: &Deployment) {
    let nodes: Vec<NodeDisplay> = deployment
        .nodes()
        .into_iter()
        .map(|n| NodeDisplay::from(&**n))
        .collect();
    let applications: Vec<ApplicationDisplay> =
        deployment.applications().iter().map(ApplicationDisplay::from).collect();
    let tasks = TaskDisplay::from_workflow(&deployment.build_workflow());

    println!("{}", table::format_table(&nodes, "No nodes defined."));
    println!("{}", table::format_table(&applications, "No applications defined."));
    println!("{}", table::format_table(&tasks, "No tasks registered."));
}

fn print_pretty(deployment: &Deployment) {
    println!("{} {}\n", "Deployment".bold(), deployment.name().bold().cyan());

    println!("{}", "Nodes:".bold());
    let nodes = deployment.nodes();
    if nodes.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for node in nodes {
        println!("  {} ({})", node.name().green(), node.hostname());
    }

    println!("\n{}", "Applications:".bold());
    if deployment.applications().is_empty() {
        println!("  {}", "none".dimmed());
    }
    for app in deployment.applications() {
        println!("  {} [{}]", app.name().green(), app.kind());
        match app.deployment_path() {
            Ok(path) => println!("    Deployment path: {}", path),
            Err(_) => println!("    Deployment path: {}", NOT_SET.yellow()),
        }
        println!("    Nodes: {}", app.node_names().join(", "));

        if !app.options().is_empty() {
            println!("    Options:");
            let mut keys: Vec<&String> = app.options().keys().collect();
            keys.sort();
            for key in keys {
                println!("      {} => {}", key, format_option_value(&app.options()[key]));
            }
        }
    }

    println!("\n{}", "Tasks:".bold());
    print_workflow(&deployment.build_workflow());
}

fn print_workflow(workflow: &Workflow) {
    if workflow.is_empty() {
        println!("  {}", "none".dimmed());
        return;
    }

    for (stage, registrations) in workflow.stages() {
        if registrations.is_empty() {
            continue;
        }
        println!("  {}:", stage.to_string().cyan());
        for registration in registrations {
            match registration.application {
                Some(application) => println!(
                    "    {} (for application {})",
                    registration.task, application
                ),
                None => println!("    {}", registration.task),
            }
        }
    }
}
