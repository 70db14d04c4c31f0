//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use caselaw_core::config::{DEFAULT_DOWNLOADS_DIR, DEFAULT_LOGS_DIR};

/// Download case-law PDFs for a list of search queries.
///
/// Each of the first four non-empty lines of QUERIES_FILE is searched in the
/// case-law API; the first-ranked case is saved as PDF and every query is
/// recorded in a timestamped CSV search log. The API token is read from the
/// `caselaw_api` environment variable.
#[derive(Parser, Debug)]
#[command(name = "caselaw-fetch")]
#[command(author, version, about)]
pub struct Args {
    /// Text file with one case search query per line
    pub queries_file: PathBuf,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Existing directory case PDFs are written to
    #[arg(long, default_value = DEFAULT_DOWNLOADS_DIR)]
    pub downloads_dir: PathBuf,

    /// Existing directory the search log CSV is written to
    #[arg(long, default_value = DEFAULT_LOGS_DIR)]
    pub logs_dir: PathBuf,

    /// Per-request timeout in seconds (1-3600); requests never time out when unset
    #[arg(short = 't', long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub timeout: Option<u64>,
}

impl Args {
    /// Default log filter derived from the verbosity flags.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
