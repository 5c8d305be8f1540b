//! Error types for build configuration validation and rendering.
//!
//! Resolution itself never fails. These errors only come from the optional
//! filesystem validation and from serialising a resolved config.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    #[error("entry path is not a file: {}", .0.display())]
    EntryNotAFile(PathBuf),

    #[error("output path exists but is not a directory: {}", .0.display())]
    OutDirNotADirectory(PathBuf),

    // Rendering errors
    #[error("failed to serialize build config: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_not_found_mentions_path() {
        let err = ConfigError::EntryNotFound(PathBuf::from("/project/src/JakBox.fsproj"));
        let msg = err.to_string();
        assert!(msg.contains("entry path not found"));
        assert!(msg.contains("JakBox.fsproj"));
    }
}
