//! iconmask CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, dispatch to the chosen
//! subcommand, and exit with a non-zero status on error. For programmatic
//! use, prefer the library API (`iconmask_core`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
