//! CLI settings loaded from `splitter.toml` and the environment.
//!
//! Priority: environment (`SPLITTER_*`) > `[settings]` table in
//! splitter.toml > defaults. Settings only affect how the CLI behaves; they
//! never change the resolved build configuration.

use std::path::Path;

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const SETTINGS_KEY: &str = "settings";
const ENV_PREFIX: &str = "SPLITTER_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Tracing filter directive, e.g. "debug" or "splitter_config=trace"
    #[serde(default)]
    pub log_level: Option<String>,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Settings {
    /// Load settings, reading `manifest` if one was found.
    pub fn load(manifest: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::default(SETTINGS_KEY, Self::default()));

        if let Some(path) = manifest {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .only(&["log_level", "pretty"])
                .map(|key| format!("{SETTINGS_KEY}.{key}").into()),
        );

        Ok(figment.extract_inner(SETTINGS_KEY)?)
    }
}
