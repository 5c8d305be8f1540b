//! Check command implementation.
//!
//! Resolves the configuration like `resolve` and validates it against the
//! filesystem without emitting it.

use crate::cli::CheckArgs;
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;
use splitter_config::{ConfigValidator, FsValidator};

/// Execute the check command.
///
/// # Errors
///
/// Returns the validation error when the entry point is missing or the
/// output path is not a directory.
pub fn execute(args: &CheckArgs, project: &Project) -> Result<()> {
    let config = splitter_config::resolve(&args.args, &project.base_dir);

    ui::info(&format!("Checking {}", config.entry().display()));

    FsValidator.validate(&config)?;

    if config.defines().is_missing_value() {
        ui::warning("--define was given without a value");
    }

    ui::success("Build configuration is valid");
    Ok(())
}
