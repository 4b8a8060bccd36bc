//! Errors surfaced by the `pixelgrid` binary.

use pixelgrid_core::{ConfigError, PatternError};
use pixelgrid_export::ExportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pattern(#[from] PatternError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("Cannot read script {path}: {source}")]
    ScriptIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("Export failed, see log for details")]
    Delivery,
}
