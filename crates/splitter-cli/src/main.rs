//! Splitter CLI entry point.

use clap::Parser;
use miette::Result;
use splitter_cli::{cli, error};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Convert CLI errors to miette diagnostics for error reporting
    splitter_cli::run(args).map_err(error::cli_error_to_miette)
}
