//! Caselaw Fetch Core Library
//!
//! This library provides the core functionality for the caselaw-fetch tool,
//! which resolves free-text case-law queries to the best matching case,
//! downloads each case as a PDF, and records a per-run CSV search log.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - Case-law API client: search resolution and PDF retrieval
//! - [`config`] - API and output configuration
//! - [`download`] - Case title sanitization and PDF persistence
//! - [`input`] - Query file loading with the fixed batch ceiling
//! - [`orchestrator`] - Sequential search, fetch and save pipeline
//! - [`report`] - Search log rows and CSV output

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod config;
pub mod download;
pub mod input;
pub mod orchestrator;
pub mod report;
#[cfg(test)]
pub mod test_support;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use api::{ApiError, CaseFetcher, CaseLawClient, QueryResolver, Resolution, ResolvedCase};
pub use config::{ApiConfig, ConfigError, RunConfig};
pub use download::{DownloadError, clean_case_title, save_case_pdf};
pub use input::{InputError, MAX_QUERIES, load_queries, select_queries};
pub use orchestrator::{DownloadOrchestrator, QueryOutcome, RunError, RunSummary};
pub use report::{CaseLink, LogRow, ReportError, SearchLog, log_file_name};
