//! The resolved build configuration handed to the splitter toolchain.
//!
//! Field names and nesting are consumed by the external bundler, so the serde
//! renames here are part of the output contract.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::define::Defines;
use crate::error::Result;

/// Entry point, relative to the project anchor.
pub const ENTRY_PATH: &str = "src/JakBox.fsproj";

/// Output directory, relative to the project anchor.
pub const OUT_DIR: &str = "out";

/// Name of the emitted bundle.
pub const OUTPUT_FILENAME: &str = "JakBox.js";

/// Transpilation preset applied to the emitted JavaScript.
pub const METRO_PRESET: &str = "module:metro-react-native-babel-preset";

/// Fixed transpilation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranspileOptions {
    filename: String,
    presets: Vec<String>,
    source_maps: bool,
    minified: bool,
    compact: bool,
}

impl TranspileOptions {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn presets(&self) -> &[String] {
        &self.presets
    }

    pub fn source_maps(&self) -> bool {
        self.source_maps
    }

    pub fn minified(&self) -> bool {
        self.minified
    }

    pub fn compact(&self) -> bool {
        self.compact
    }
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            filename: OUTPUT_FILENAME.to_string(),
            presets: vec![METRO_PRESET.to_string()],
            source_maps: true,
            minified: false,
            compact: false,
        }
    }
}

/// Options forwarded to the F# compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CompilerOptions {
    define: Defines,
}

impl CompilerOptions {
    pub fn define(&self) -> &Defines {
        &self.define
    }
}

/// Build configuration for one invocation.
///
/// Constructed once and never mutated afterwards.
///
/// # Example
///
/// ```
/// use splitter_config::{BuildConfig, Defines};
/// use std::path::Path;
///
/// let config = BuildConfig::new("/project", Defines::single("PRODUCTION"));
/// assert_eq!(config.entry(), Path::new("/project/src/JakBox.fsproj"));
/// assert_eq!(config.bundling_message(), "Bundling for PRODUCTION...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Absolute path to the F# project that is the bundle entry point
    entry: PathBuf,

    /// Absolute output directory
    out_dir: PathBuf,

    /// Transpilation options
    babel: TranspileOptions,

    /// Compiler options
    fable: CompilerOptions,
}

impl BuildConfig {
    /// Anchor the fixed paths at `base_dir` and attach `defines`.
    ///
    /// `base_dir` must be absolute so that `entry` and `out_dir` are too.
    /// Paths are normalised lexically; nothing is read from disk.
    pub fn new(base_dir: impl AsRef<Path>, defines: Defines) -> Self {
        let base_dir = base_dir.as_ref();
        debug_assert!(
            base_dir.is_absolute(),
            "base_dir must be absolute: {}",
            base_dir.display()
        );

        Self {
            entry: base_dir.join(ENTRY_PATH).clean(),
            out_dir: base_dir.join(OUT_DIR).clean(),
            babel: TranspileOptions::default(),
            fable: CompilerOptions { define: defines },
        }
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn babel(&self) -> &TranspileOptions {
        &self.babel
    }

    pub fn fable(&self) -> &CompilerOptions {
        &self.fable
    }

    pub fn defines(&self) -> &Defines {
        &self.fable.define
    }

    /// The line reported before bundling starts.
    pub fn bundling_message(&self) -> String {
        format!("Bundling for {}...", self.fable.define)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as JSON text.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// JSON Schema describing the serialised shape.
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(BuildConfig);
        schema.to_value()
    }
}
