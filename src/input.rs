//! Query file loading.
//!
//! The input is a plain text file with one search query per line. A run
//! processes a fixed batch of at most [`MAX_QUERIES`] queries.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Maximum number of queries processed per run.
pub const MAX_QUERIES: usize = 4;

/// Errors reading the query file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The query file could not be opened or read
    #[error("Usage: requires existing text file ({path}: {source})")]
    Read {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Selects the queries for one run from the query file contents.
///
/// Lines are split on `\n` and `\r\n`. Empty lines are skipped; every other
/// line, including one made only of spaces, is kept verbatim, in order, up to
/// [`MAX_QUERIES`].
#[must_use]
pub fn select_queries(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .take(MAX_QUERIES)
        .map(str::to_string)
        .collect()
}

/// Reads `path` and returns the queries for one run.
///
/// # Errors
///
/// Returns [`InputError::Read`] when the file cannot be read as UTF-8 text.
pub fn load_queries(path: &Path) -> Result<Vec<String>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let queries = select_queries(&text);
    let non_empty = text.lines().filter(|line| !line.is_empty()).count();
    if non_empty > queries.len() {
        warn!(
            ignored = non_empty - queries.len(),
            max = MAX_QUERIES,
            "query file has more lines than one batch; extra lines ignored"
        );
    }
    debug!(path = %path.display(), queries = queries.len(), "loaded queries");
    Ok(queries)
}
