//! Surf CLI - describe deployments of applications to nodes

use clap::Parser;

use surf::cli::{Cli, Commands, GlobalOptions, describe, list};
use surf::error::Result;
use surf::logger;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::List => list::run(&opts),
        Commands::Describe { deployment } => describe::run(&opts, &deployment),
        Commands::Version => {
            println!("surf version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
