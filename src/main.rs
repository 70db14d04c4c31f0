//! CLI entry point for the caselaw-fetch tool.

use std::time::Duration;

use anyhow::{Context, Result};
use caselaw_core::{ApiConfig, CaseLawClient, DownloadOrchestrator, RunConfig, load_queries};
use clap::Parser;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so usage errors print cleanly)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    debug!(?args, "CLI arguments parsed");

    // Read queries before touching the network
    let queries = load_queries(&args.queries_file)?;
    info!(queries = queries.len(), "Caselaw fetch starting");

    let api_config = ApiConfig::from_env()?.with_timeout(args.timeout.map(Duration::from_secs));
    let client = CaseLawClient::new(&api_config).context("cannot initialize API client")?;

    let run_config = RunConfig {
        downloads_dir: args.downloads_dir,
        logs_dir: args.logs_dir,
    };

    let summary = DownloadOrchestrator::new(client, run_config)
        .run(&queries)
        .await
        .context("batch aborted; no search log written")?;

    info!(
        downloaded = summary.downloaded(),
        failed = summary.failed(),
        log = %summary.log_path.display(),
        "Caselaw fetch complete"
    );

    Ok(())
}
