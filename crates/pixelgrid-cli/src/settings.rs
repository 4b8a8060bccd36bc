//! The `--config` file: an `[editor]` table and an `[export]` table.

use pixelgrid_core::{ConfigError, EditorConfig};
use pixelgrid_export::ExportConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CliConfig {
    pub(crate) editor: EditorConfig,
    pub(crate) export: ExportConfig,
}

impl CliConfig {
    pub(crate) fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.editor.validate()?;
        Ok(config)
    }

    /// Defaults when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::debug!("loading configuration from {}", path.display());
                Self::from_toml_str(&std::fs::read_to_string(path)?)
            }
            None => Ok(Self::default()),
        }
    }

    pub(crate) fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
