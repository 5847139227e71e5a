//! ## innsim-cli
//! **Command-line front end for the hotel booking simulation**
//!
//! Runs a simulation and streams its tagged output to the terminal.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::run_command(cli)
}
