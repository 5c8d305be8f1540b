//! Logging infrastructure for the Splitter CLI.
//!
//! Log events go to stderr so stdout carries only the bundling message and
//! the resolved configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use splitter_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false, None);
//! info!("Resolving build configuration");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "splitter=debug,splitter_cli=debug,splitter_config=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "splitter=info,splitter_cli=info,splitter_config=info";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for splitter crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. `log_level` from settings
/// 5. info for splitter crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, log_level: Option<&str>) {
    let filter = build_filter(verbose, quiet, log_level);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_filter(verbose: bool, quiet: bool, log_level: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    if quiet {
        return EnvFilter::new(QUIET_FILTER);
    }

    EnvFilter::try_from_default_env()
        .or_else(|_| match log_level {
            Some(level) => EnvFilter::try_new(level),
            None => Ok(EnvFilter::new(DEFAULT_FILTER)),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
