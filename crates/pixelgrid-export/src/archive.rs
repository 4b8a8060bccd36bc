//! Bundling exported files.

use crate::error::ExportError;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A container collecting named files into one downloadable blob.
pub trait Archive {
    /// Add a file.
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<(), ExportError>;

    /// Finalize the container and return its bytes.
    fn finish(self) -> Result<Vec<u8>, ExportError>;
}

/// In-memory zip [`Archive`] with deflate compression.
pub struct ZipBundle {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    entries: usize,
}

impl std::fmt::Debug for ZipBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipBundle")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl Default for ZipBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipBundle {
    /// Start an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            entries: 0,
        }
    }

    /// Number of entries written so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    /// Whether no entry has been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

impl Archive for ZipBundle {
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.writer.start_file(name, options)?;
        self.writer.write_all(bytes)?;
        self.entries += 1;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.writer.finish()?.into_inner())
    }
}
