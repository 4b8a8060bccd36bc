//! Error types for pixelgrid-core.

use thiserror::Error;

/// Errors loading or writing an editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML document could not be parsed into a configuration.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value the editor cannot use.
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors loading a seed pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// IO error reading the pattern file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The pattern is not a JSON array of `[x, y]` pairs.
    #[error("Invalid pattern: {0}")]
    Json(#[from] serde_json::Error),

    /// The source image could not be decoded.
    #[error("Cannot read pattern image: {0}")]
    Image(#[from] image::ImageError),
}
