//! Saving fetched case PDFs to disk.
//!
//! # Example
//!
//! ```no_run
//! use caselaw_core::download::save_case_pdf;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = save_case_pdf(Path::new("downloads"), "Marbury v. Madison", b"%PDF-1.4").await?;
//! println!("Saved: {}", path.display());
//! # Ok(())
//! # }
//! ```

mod error;
mod filename;

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

pub use error::DownloadError;
pub use filename::{MAX_TITLE_CHARS, RESERVED_TITLE_CHARS, clean_case_title};

/// Extension appended to every saved case.
pub const PDF_EXTENSION: &str = "pdf";

/// Returns the path a case with the given title is saved to.
#[must_use]
pub fn case_pdf_path(downloads_dir: &Path, case_name: &str) -> PathBuf {
    downloads_dir.join(format!("{}.{PDF_EXTENSION}", clean_case_title(case_name)))
}

/// Writes `bytes` to `<downloads_dir>/<cleaned case name>.pdf`.
///
/// An existing file with the same name is truncated and replaced. The
/// directory must already exist.
///
/// # Errors
///
/// Returns [`DownloadError::Io`] when the file cannot be written.
#[instrument(skip(bytes), fields(bytes = bytes.len()))]
pub async fn save_case_pdf(
    downloads_dir: &Path,
    case_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, DownloadError> {
    let path = case_pdf_path(downloads_dir, case_name);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| DownloadError::io(path.clone(), e))?;
    debug!(path = %path.display(), "case PDF written");
    Ok(path)
}
