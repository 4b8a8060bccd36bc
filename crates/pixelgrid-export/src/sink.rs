//! Delivery of finished exports.

use crate::error::ExportError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination that receives a named file, the equivalent of triggering a
/// browser download.
pub trait DownloadSink {
    /// Deliver `bytes` under `name`, returning where they ended up.
    fn deliver(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Writes deliveries into a directory, creating it on demand.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Deliver into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// Keeps deliveries in memory. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All deliveries in arrival order.
    #[must_use]
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bytes of the most recent delivery named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, bytes)| bytes.clone())
    }

    /// Number of deliveries received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(name))
    }
}
