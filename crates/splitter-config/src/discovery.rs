//! Project anchor discovery for CLI use
//!
//! The directory holding `splitter.toml` is the base directory paths are
//! resolved against.

use std::path::{Path, PathBuf};

use tracing::debug;

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "splitter.toml";

/// Searches for `splitter.toml` starting at a directory and walking up.
///
/// # Example
///
/// ```no_run
/// use splitter_config::ProjectDiscovery;
///
/// let discovery = ProjectDiscovery::new(".");
/// if let Some(base_dir) = discovery.base_dir() {
///     println!("project anchored at {}", base_dir.display());
/// }
/// ```
pub struct ProjectDiscovery {
    start: PathBuf,
    ceiling: Option<PathBuf>,
}

impl ProjectDiscovery {
    pub fn new(start: impl AsRef<Path>) -> Self {
        Self {
            start: start.as_ref().to_path_buf(),
            ceiling: None,
        }
    }

    /// Stop the upward search after `ceiling` has been checked.
    pub fn with_ceiling(mut self, ceiling: impl AsRef<Path>) -> Self {
        self.ceiling = Some(ceiling.as_ref().to_path_buf());
        self
    }

    /// Path of the nearest manifest at or above the start directory.
    pub fn find(&self) -> Option<PathBuf> {
        for dir in self.start.ancestors() {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                debug!("found project manifest at {}", candidate.display());
                return Some(candidate);
            }

            if self.ceiling.as_deref() == Some(dir) {
                break;
            }
        }

        None
    }

    /// Directory containing the nearest manifest.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.find()
            .and_then(|manifest| manifest.parent().map(Path::to_path_buf))
    }
}
