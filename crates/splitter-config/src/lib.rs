//! Build configuration resolver for the JakBox splitter toolchain.
//!
//! Given the invocation arguments and the project's base directory, produces
//! the [`BuildConfig`] the external bundler consumes: an absolute entry point,
//! an absolute output directory, fixed transpilation options and the
//! compilation define taken from `--define`.

pub mod build;
pub mod define;
pub mod discovery;
pub mod error;
pub mod resolve;
pub mod validation;

// Re-export main types
pub use build::*;
pub use define::*;
pub use error::*;
pub use resolve::{resolve, resolve_with_writer};

pub use discovery::{ProjectDiscovery, MANIFEST_FILE};
pub use validation::{validate_fs, ConfigValidator, FsValidator};
