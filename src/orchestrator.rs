//! Sequential search-and-download pipeline.
//!
//! Each query is resolved, fetched and written before the next one starts.
//! A query with no search results is reported but not logged; a query whose
//! first result is unusable is reported and logged as not downloaded. Any
//! transport, status, decode or file error aborts the rest of the batch and
//! no search log is written for that run.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::api::{ApiError, CaseFetcher, CaseLawClient, QueryResolver, Resolution};
use crate::config::RunConfig;
use crate::download::{DownloadError, save_case_pdf};
use crate::report::{LogRow, ReportError, SearchLog};

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Searching or fetching failed
    #[error("request for query '{query}' failed: {source}")]
    Api {
        /// The query being processed.
        query: String,
        /// The underlying API error.
        #[source]
        source: ApiError,
    },

    /// Writing a case PDF failed
    #[error("saving case for query '{query}' failed: {source}")]
    Download {
        /// The query being processed.
        query: String,
        /// The underlying download error.
        #[source]
        source: DownloadError,
    },

    /// Writing the search log failed
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// What happened to one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The case PDF was written to `path`.
    Downloaded {
        /// Where the PDF was written.
        path: PathBuf,
    },
    /// The search returned nothing. No log row is recorded.
    NoResults,
    /// The first result lacked an identifier or name. Logged as not downloaded.
    Incomplete,
}

impl QueryOutcome {
    /// Progress line printed for this outcome.
    #[must_use]
    pub fn notice(&self, query: &str) -> String {
        match self {
            Self::Downloaded { .. } => format!("SUCCESSFULLY DOWNLOADED {query}"),
            Self::NoResults | Self::Incomplete => format!("FAILED TO LOAD {query}"),
        }
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Per-query outcomes in input order.
    pub outcomes: Vec<(String, QueryOutcome)>,
    /// Rows written to the search log.
    pub rows: Vec<LogRow>,
    /// Path of the search log.
    pub log_path: PathBuf,
}

impl RunSummary {
    /// Number of queries whose case was written to disk.
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, QueryOutcome::Downloaded { .. }))
    }

    /// Number of queries that were not downloaded.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.downloaded()
    }

    /// Number of failed queries absent from the search log.
    #[must_use]
    pub fn unlogged(&self) -> usize {
        self.count(|o| matches!(o, QueryOutcome::NoResults))
    }

    fn count(&self, predicate: impl Fn(&QueryOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}

/// Drives the per-query pipeline and writes the run's search log.
#[derive(Debug, Clone)]
pub struct DownloadOrchestrator {
    resolver: QueryResolver,
    fetcher: CaseFetcher,
    config: RunConfig,
}

impl DownloadOrchestrator {
    /// Creates an orchestrator whose resolver and fetcher share `client`.
    #[must_use]
    pub fn new(client: CaseLawClient, config: RunConfig) -> Self {
        Self {
            resolver: QueryResolver::new(client.clone()),
            fetcher: CaseFetcher::new(client),
            config,
        }
    }

    /// Processes `queries` in order, then writes the search log stamped with
    /// the local time at which the last query finished.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] on the first API, file or log failure. Cases
    /// written before the failure stay on disk; no log is written.
    pub async fn run(&self, queries: &[String]) -> Result<RunSummary, RunError> {
        self.run_with_clock(queries, || Local::now().naive_local()).await
    }

    /// Same as [`run`](Self::run) with an explicit timestamp for the log name.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub async fn run_at(
        &self,
        queries: &[String],
        finished_at: NaiveDateTime,
    ) -> Result<RunSummary, RunError> {
        self.run_with_clock(queries, move || finished_at).await
    }

    /// `clock` is read once, after every query has been processed.
    #[instrument(skip(self, queries, clock), fields(queries = queries.len()))]
    async fn run_with_clock(
        &self,
        queries: &[String],
        clock: impl FnOnce() -> NaiveDateTime,
    ) -> Result<RunSummary, RunError> {
        let mut log = SearchLog::new();
        let mut outcomes = Vec::with_capacity(queries.len());

        for query in queries {
            let outcome = self.process_query(query, &mut log).await?;
            println!("{}", outcome.notice(query));
            outcomes.push((query.clone(), outcome));
        }

        let log_path = log.save(&self.config.logs_dir, &clock()).await?;
        let summary = RunSummary {
            outcomes,
            rows: log.rows().to_vec(),
            log_path,
        };
        info!(
            downloaded = summary.downloaded(),
            failed = summary.failed(),
            unlogged = summary.unlogged(),
            "run complete"
        );
        Ok(summary)
    }

    async fn process_query(
        &self,
        query: &str,
        log: &mut SearchLog,
    ) -> Result<QueryOutcome, RunError> {
        let resolution = self
            .resolver
            .resolve(query)
            .await
            .map_err(|source| api_error(query, source))?;

        let case = match resolution {
            Resolution::NoResults => {
                warn!(query, "no search results");
                return Ok(QueryOutcome::NoResults);
            }
            Resolution::Incomplete => {
                warn!(query, "first search result is missing an id or name");
                log.push(LogRow::unresolved(query));
                return Ok(QueryOutcome::Incomplete);
            }
            Resolution::Resolved(case) => case,
        };

        let pdf = self
            .fetcher
            .fetch_pdf(&case.id)
            .await
            .map_err(|source| api_error(query, source))?;

        let path = save_case_pdf(&self.config.downloads_dir, &case.name, &pdf)
            .await
            .map_err(|source| RunError::Download {
                query: query.to_string(),
                source,
            })?;
        debug!(query, path = %path.display(), "case saved");

        log.push(LogRow::downloaded(query, case.url));
        Ok(QueryOutcome::Downloaded { path })
    }
}

fn api_error(query: &str, source: ApiError) -> RunError {
    RunError::Api {
        query: query.to_string(),
        source,
    }
}
