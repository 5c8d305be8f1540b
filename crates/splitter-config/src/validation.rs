//! Optional filesystem checks on a resolved config.
//!
//! Resolution stays permissive; toolchains that want a stricter contract run
//! a validator on the result.

use crate::build::BuildConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Filesystem validator (for CLI use)
///
/// Checks that the entry point is an existing file and that the output path,
/// when it already exists, is a directory.
///
/// # Example
///
/// ```no_run
/// use splitter_config::{BuildConfig, ConfigValidator, Defines, FsValidator};
///
/// let config = BuildConfig::new("/project", Defines::none());
/// FsValidator.validate(&config).unwrap();
/// ```
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        let entry = config.entry();
        if !entry.exists() {
            return Err(ConfigError::EntryNotFound(entry.to_path_buf()));
        }
        if !entry.is_file() {
            return Err(ConfigError::EntryNotAFile(entry.to_path_buf()));
        }

        let out_dir = config.out_dir();
        if out_dir.exists() && !out_dir.is_dir() {
            return Err(ConfigError::OutDirNotADirectory(out_dir.to_path_buf()));
        }

        Ok(())
    }
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig) -> Result<()> {
    FsValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{ENTRY_PATH, OUT_DIR};
    use crate::define::Defines;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_entry() -> TempDir {
        let dir = TempDir::new().unwrap();
        let entry = dir.path().join(ENTRY_PATH);
        fs::create_dir_all(entry.parent().unwrap()).unwrap();
        fs::write(&entry, "<Project />").unwrap();
        dir
    }

    #[test]
    fn accepts_existing_entry_without_out_dir() {
        let dir = project_with_entry();
        let config = BuildConfig::new(dir.path(), Defines::none());
        assert!(validate_fs(&config).is_ok());
    }

    #[test]
    fn accepts_existing_out_dir() {
        let dir = project_with_entry();
        fs::create_dir_all(dir.path().join(OUT_DIR)).unwrap();
        let config = BuildConfig::new(dir.path(), Defines::none());
        assert!(validate_fs(&config).is_ok());
    }

    #[test]
    fn rejects_missing_entry() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path(), Defines::none());
        let err = validate_fs(&config).unwrap_err();
        assert!(matches!(err, ConfigError::EntryNotFound(path) if path == config.entry()));
    }

    #[test]
    fn rejects_entry_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(ENTRY_PATH)).unwrap();
        let config = BuildConfig::new(dir.path(), Defines::none());
        assert!(matches!(
            validate_fs(&config).unwrap_err(),
            ConfigError::EntryNotAFile(_)
        ));
    }

    #[test]
    fn rejects_out_path_that_is_a_file() {
        let dir = project_with_entry();
        fs::write(dir.path().join(OUT_DIR), "").unwrap();
        let config = BuildConfig::new(dir.path(), Defines::none());
        assert!(matches!(
            validate_fs(&config).unwrap_err(),
            ConfigError::OutDirNotADirectory(_)
        ));
    }
}
