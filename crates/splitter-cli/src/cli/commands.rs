use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Splitter subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build configuration
    ///
    /// Prints the bundling message, then writes the configuration as JSON to
    /// stdout or to --output.
    Resolve(ResolveArgs),

    /// Resolve the build configuration and check it against the filesystem
    ///
    /// Fails when the entry point is missing or the output path is not a
    /// directory.
    Check(CheckArgs),

    /// Print the JSON schema of the build configuration
    Schema(SchemaArgs),
}

/// Options locating the project the configuration is anchored to
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Path to splitter.toml
    ///
    /// Its directory becomes the base directory. Without this flag the
    /// nearest splitter.toml at or above the current directory is used.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base directory to anchor the entry point and output directory at
    ///
    /// Takes precedence over the directory of splitter.toml.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the JSON configuration to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON configuration
    #[arg(long)]
    pub pretty: bool,

    /// Invocation arguments scanned for `--define <VALUE>`
    ///
    /// Examples:
    ///   splitter resolve -- --define PRODUCTION
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Invocation arguments scanned for `--define <VALUE>`
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
