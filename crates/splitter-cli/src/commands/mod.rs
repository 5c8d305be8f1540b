//! Command implementations for the Splitter CLI.
//!
//! - [`resolve`] - Resolve and emit the build configuration
//! - [`check`] - Validate the resolved configuration against the filesystem
//! - [`schema`] - Emit the configuration JSON schema

pub mod check;
pub mod resolve;
pub mod schema;
pub mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
pub use schema::execute as schema_execute;
