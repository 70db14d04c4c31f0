//! Per-run search log.
//!
//! Rows accumulate in memory in query order and are written once, as CSV, at
//! the end of a completed run. The file layout matches a pandas `to_csv` dump:
//! an unnamed leading index column, then `Name`, `Link` and `Downloaded`, with
//! booleans rendered `True`/`False`.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, info};

/// CSV header row.
pub const LOG_HEADER: [&str; 4] = ["", "Name", "Link", "Downloaded"];

/// Prefix of every search log file name.
pub const LOG_FILE_PREFIX: &str = "Searchlog_";

/// Timestamp format used in log file names (minute granularity).
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// Errors writing the search log.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV encoding or the underlying writer failed
    #[error("failed to write search log {path}: {source}")]
    Csv {
        /// Destination of the log.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// The log file could not be created or flushed
    #[error("IO error writing search log {path}: {source}")]
    Io {
        /// Destination of the log.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Link column of a log row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseLink {
    /// Canonical URL of the downloaded case.
    Url(String),
    /// No usable match; rendered as `False`.
    Missing,
}

impl CaseLink {
    fn as_field(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Missing => "False",
        }
    }
}

/// One row of the search log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// The query exactly as read from the input file.
    pub name: String,
    /// Case URL, or [`CaseLink::Missing`].
    pub link: CaseLink,
    /// Whether the case PDF was written.
    pub downloaded: bool,
}

impl LogRow {
    /// Row for a query whose case was downloaded.
    #[must_use]
    pub fn downloaded(query: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: query.into(),
            link: CaseLink::Url(url.into()),
            downloaded: true,
        }
    }

    /// Row for a query whose first match was unusable.
    #[must_use]
    pub fn unresolved(query: impl Into<String>) -> Self {
        Self {
            name: query.into(),
            link: CaseLink::Missing,
            downloaded: false,
        }
    }
}

fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Ordered collection of log rows for one run.
#[derive(Debug, Default)]
pub struct SearchLog {
    rows: Vec<LogRow>,
}

impl SearchLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn push(&mut self, row: LogRow) {
        self.rows.push(row);
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[LogRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when no rows were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the log as CSV to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`csv::Error`] when encoding or writing fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
        csv_writer.write_record(LOG_HEADER)?;
        for (index, row) in self.rows.iter().enumerate() {
            csv_writer.write_record([
                index.to_string().as_str(),
                row.name.as_str(),
                row.link.as_field(),
                python_bool(row.downloaded),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Writes the log to `<logs_dir>/Searchlog_<YYYY-MM-DD-HH-MM>.csv`.
    ///
    /// The CSV is rendered in memory and written in one call. An existing file
    /// with the same name (same minute) is replaced. The directory must
    /// already exist.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when the rows cannot be encoded or the file
    /// cannot be written.
    pub async fn save(
        &self,
        logs_dir: &Path,
        stamped_at: &NaiveDateTime,
    ) -> Result<PathBuf, ReportError> {
        let path = logs_dir.join(log_file_name(stamped_at));
        let mut contents = Vec::new();
        self.write_csv(&mut contents)
            .map_err(|source| ReportError::Csv {
                path: path.clone(),
                source,
            })?;
        tokio::fs::write(&path, &contents)
            .await
            .map_err(|source| ReportError::Io {
                path: path.clone(),
                source,
            })?;
        debug!(rows = self.rows.len(), bytes = contents.len(), "search log rows written");
        info!(path = %path.display(), "search log saved");
        Ok(path)
    }
}

/// File name of the search log stamped at `stamped_at`.
#[must_use]
pub fn log_file_name(stamped_at: &NaiveDateTime) -> String {
    format!(
        "{LOG_FILE_PREFIX}{}.csv",
        stamped_at.format(LOG_TIMESTAMP_FORMAT)
    )
}
