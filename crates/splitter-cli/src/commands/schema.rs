//! Schema command implementation.

use crate::cli::SchemaArgs;
use crate::commands::utils;
use crate::error::Result;
use splitter_config::BuildConfig;

/// Print the JSON schema of the build configuration.
pub fn execute(args: &SchemaArgs) -> Result<()> {
    let schema = serde_json::to_string_pretty(&BuildConfig::json_schema())?;
    utils::write_output(&schema, args.output.as_deref())
}
