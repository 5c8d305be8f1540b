//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::commands::utils::{self, Project};
use crate::error::Result;
use crate::settings::Settings;
use tracing::info;

/// Execute the resolve command.
///
/// The resolver prints the bundling message on stdout; the JSON config
/// follows on stdout or goes to `--output`.
pub fn execute(args: &ResolveArgs, project: &Project, settings: &Settings) -> Result<()> {
    let config = splitter_config::resolve(&args.args, &project.base_dir);

    let pretty = args.pretty || settings.pretty;
    let json = config.to_json(pretty)?;
    utils::write_output(&json, args.output.as_deref())?;

    if let Some(path) = &args.output {
        info!("wrote build config to {}", path.display());
    }

    Ok(())
}
