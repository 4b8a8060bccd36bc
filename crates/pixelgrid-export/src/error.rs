//! Error types for pixelgrid-export.

use thiserror::Error;

/// Errors that can occur while producing or delivering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The raster surface could not be allocated.
    #[error("Cannot allocate {width}x{height} surface: {reason}")]
    Surface {
        width: u32,
        height: u32,
        reason: String,
    },

    /// PNG encoding failed.
    #[error("Encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the zip archive failed.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// IO error from a download sink or the archive writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glyph path data is malformed.
    #[error("Invalid glyph path: {0}")]
    Glyph(String),

    /// Export configuration is unusable.
    #[error("Invalid export configuration: {0}")]
    Config(String),

    /// The background export thread panicked.
    #[error("Export worker panicked")]
    WorkerPanicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_export_error_surface() {
        let err = ExportError::Surface {
            width: 12000,
            height: 8000,
            reason: "exceeds pixel limit".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("12000x8000"));
        assert!(msg.contains("pixel limit"));
    }

    #[test]
    fn test_export_error_archive() {
        let err = ExportError::from(zip::result::ZipError::FileNotFound);
        assert!(err.to_string().starts_with("Archive error"));
    }
}
