//! Splitter CLI - resolves the JakBox build configuration.
//!
//! Thin command-line surface over `splitter-config`:
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `resolve`, `check` and `schema`
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`settings`] - splitter.toml / `SPLITTER_*` settings
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result, ResultExt};

use cli::{Cli, Command};
use commands::utils::{self, Project};
use settings::Settings;

/// Run a parsed command line to completion.
///
/// Locates the project, loads settings, initialises logging and dispatches
/// the subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let project_args = cli.project().cloned().unwrap_or_default();
    let project = Project::locate(&project_args, &cwd)?;
    let settings = Settings::load(project.manifest())?;

    let no_color = cli.no_color || !ui::should_use_color();
    logger::init_logger(cli.verbose, cli.quiet, no_color, settings.log_level.as_deref());
    ui::init_colors(cli.no_color);

    match &cli.command {
        Command::Resolve(args) => commands::resolve_execute(args, &project, &settings),
        Command::Check(args) => commands::check_execute(args, &project),
        Command::Schema(args) => commands::schema_execute(args),
    }
}
