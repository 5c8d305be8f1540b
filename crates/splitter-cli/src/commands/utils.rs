//! Shared utilities for command implementations.
//!
//! - Path resolution against the working directory
//! - Locating the project anchor
//! - Writing command output to stdout or a file

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result, ResultExt};
use splitter_config::ProjectDiscovery;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Where the build configuration is anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Absolute base directory passed to the resolver
    pub base_dir: PathBuf,

    /// splitter.toml in use, if any
    pub manifest: Option<PathBuf>,
}

impl Project {
    /// Locate the project from CLI options.
    ///
    /// The base directory is, in order: `--base-dir`, the directory of
    /// `--config`, the directory of the nearest discovered splitter.toml, and
    /// finally `cwd`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::FileNotFound` if `--config` names a missing file.
    pub fn locate(args: &ProjectArgs, cwd: &Path) -> Result<Self> {
        let manifest = match &args.config {
            Some(path) => {
                let path = resolve_path(path, cwd);
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path));
                }
                Some(path)
            }
            None => ProjectDiscovery::new(cwd).find(),
        };

        let base_dir = match (&args.base_dir, &manifest) {
            (Some(dir), _) => resolve_path(dir, cwd),
            (None, Some(manifest)) => manifest
                .parent()
                .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf),
            (None, None) => cwd.to_path_buf(),
        };

        debug!(
            base_dir = %base_dir.display(),
            manifest = ?manifest,
            "located project"
        );

        Ok(Self { base_dir, manifest })
    }

    pub fn manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }
}

/// Write `contents` to `output`, or to stdout when no file is given.
///
/// Parent directories of `output` are created as needed.
pub fn write_output(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let hint = "Check that --output names a writable file path";
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_path(parent)
                    .with_hint(hint)?;
            }
            fs::write(path, format!("{contents}\n"))
                .with_path(path)
                .with_hint(hint)?;
            debug!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{contents}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitter_config::MANIFEST_FILE;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_path_absolute() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_path(Path::new("/srv/app"), cwd),
            PathBuf::from("/srv/app")
        );
    }

    #[test]
    fn test_resolve_path_relative() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_path(Path::new("app"), cwd),
            PathBuf::from("/work/app")
        );
    }

    #[test]
    fn test_locate_prefers_base_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE), "").unwrap();

        let args = ProjectArgs {
            config: None,
            base_dir: Some(PathBuf::from("mobile")),
        };
        let project = Project::locate(&args, temp.path()).unwrap();
        assert_eq!(project.base_dir, temp.path().join("mobile"));
        assert_eq!(project.manifest, Some(temp.path().join(MANIFEST_FILE)));
    }

    #[test]
    fn test_locate_uses_config_directory() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        fs::create_dir_all(&app).unwrap();
        fs::write(app.join(MANIFEST_FILE), "").unwrap();

        let args = ProjectArgs {
            config: Some(PathBuf::from("app").join(MANIFEST_FILE)),
            base_dir: None,
        };
        let project = Project::locate(&args, temp.path()).unwrap();
        assert_eq!(project.base_dir, app);
    }

    #[test]
    fn test_locate_discovers_manifest_above_cwd() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE), "").unwrap();
        let nested = temp.path().join("src/screens");
        fs::create_dir_all(&nested).unwrap();

        let project = Project::locate(&ProjectArgs::default(), &nested).unwrap();
        assert_eq!(project.base_dir, temp.path());
        assert_eq!(project.manifest(), Some(temp.path().join(MANIFEST_FILE).as_path()));
    }

    #[test]
    fn test_locate_missing_config_fails() {
        let temp = TempDir::new().unwrap();
        let args = ProjectArgs {
            config: Some(PathBuf::from("missing.toml")),
            base_dir: None,
        };
        let err = Project::locate(&args, temp.path()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("build/config.json");

        write_output("{}", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_write_output_failure_carries_hint() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("build");
        fs::write(&blocker, "").unwrap();

        let err = write_output("{}", Some(&blocker.join("config.json"))).unwrap_err();
        assert!(matches!(err, CliError::Custom(_)));
        assert!(err.to_string().contains("Hint: Check that --output"));
    }
}
