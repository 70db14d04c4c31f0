//! Errors raised while persisting fetched case PDFs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while saving a downloaded case.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Writing the PDF failed; the downloads directory is never created on demand.
    #[error("cannot write case PDF {path}: {source}")]
    Io {
        /// Target PDF path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Wraps a write failure for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
