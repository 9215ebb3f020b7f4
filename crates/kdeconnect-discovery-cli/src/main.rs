//! KDE Connect discovery CLI - scan the local network for KDE Connect devices.
//!
//! Listens for identity broadcasts and prints the devices found, as a table
//! or as JSON for scripts.

mod cli;
mod commands;
mod device;
mod error;
mod logging;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let options = device::discovery::DiscoveryOptions::from_cli(&cli)?;

    match cli.command {
        Commands::Scan(args) => commands::run_scan(args, options, cli.json).await,
    }
}
