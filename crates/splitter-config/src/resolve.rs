//! Configuration resolution from invocation arguments.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::build::BuildConfig;
use crate::define::Defines;

/// Resolve the build configuration and report it on stdout.
///
/// `invocation_args` is the raw argument list, program name included or not.
/// `base_dir` anchors the entry point and output directory and must be
/// absolute.
///
/// Resolution never fails: a `--define` without a value degrades to an empty
/// slot, and a failed stdout write is only logged.
///
/// # Example
///
/// ```
/// use splitter_config::resolve;
///
/// let config = resolve(["node", "script", "--define", "PRODUCTION"], "/project");
/// assert_eq!(config.defines().value(), Some("PRODUCTION"));
/// ```
pub fn resolve<I, S>(invocation_args: I, base_dir: impl AsRef<Path>) -> BuildConfig
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    resolve_with_writer(invocation_args, base_dir, &mut lock)
}

/// Like [`resolve`], but writes the bundling message to `out`.
pub fn resolve_with_writer<I, S, W>(
    invocation_args: I,
    base_dir: impl AsRef<Path>,
    out: &mut W,
) -> BuildConfig
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write + ?Sized,
{
    let base_dir = base_dir.as_ref();
    let defines = Defines::from_args(invocation_args);
    let config = BuildConfig::new(base_dir, defines);

    debug!(
        base_dir = %base_dir.display(),
        entry = %config.entry().display(),
        out_dir = %config.out_dir().display(),
        defines = %config.defines(),
        "resolved build config"
    );

    if let Err(err) = writeln!(out, "{}", config.bundling_message()) {
        warn!("failed to write bundling message: {err}");
    }

    config
}
