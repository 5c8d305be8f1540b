//! Command-line interface definition for Splitter.
//!
//! # Command Structure
//!
//! - `splitter resolve` - Resolve and emit the build configuration
//! - `splitter check` - Resolve and validate against the filesystem
//! - `splitter schema` - Emit the configuration JSON schema

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, ProjectArgs, ResolveArgs, SchemaArgs};

/// Splitter - build configuration for the JakBox splitter toolchain
#[derive(Parser, Debug)]
#[command(
    name = "splitter",
    version,
    about = "Resolve the JakBox splitter build configuration",
    long_about = "Resolves the configuration consumed by the splitter toolchain: the F# entry\n\
                  project, the output directory, transpilation options and the compilation\n\
                  define passed with --define."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Project options of the selected subcommand, if it has any.
    pub fn project(&self) -> Option<&ProjectArgs> {
        match &self.command {
            Command::Resolve(args) => Some(&args.project),
            Command::Check(args) => Some(&args.project),
            Command::Schema(_) => None,
        }
    }
}
