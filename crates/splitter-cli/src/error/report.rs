//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use splitter_config::ConfigError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Settings(e) => {
            miette::miette!(
                "Invalid settings: {}\n\nHint: Check splitter.toml syntax and SPLITTER_* environment variables",
                e
            )
        }
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::EntryNotFound(path) => miette::miette!(
            "Entry point not found: {}\n\nHint: Run from the project directory or pass --base-dir",
            path.display()
        ),
        ConfigError::OutDirNotADirectory(path) => miette::miette!(
            "Output path is not a directory: {}\n\nHint: Remove the file or move it out of the way",
            path.display()
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
