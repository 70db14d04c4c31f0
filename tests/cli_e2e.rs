//! End-to-end CLI tests for the caselaw-fetch binary.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::socket_guard::start_mock_server_or_skip;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn caselaw_fetch() -> Command {
    let mut cmd = Command::cargo_bin("caselaw-fetch").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Test that running without the query file argument is a usage error.
#[test]
fn test_binary_missing_argument_returns_usage_error() {
    caselaw_fetch()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

/// Test that more than one positional argument is a usage error.
#[test]
fn test_binary_extra_argument_returns_usage_error() {
    caselaw_fetch()
        .args(["a.txt", "b.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

/// Test that an unreadable query file fails before any network activity.
#[test]
fn test_binary_missing_file_reports_usage() {
    let temp_dir = TempDir::new().unwrap();
    caselaw_fetch()
        .current_dir(temp_dir.path())
        // Unroutable base URL: any network attempt would fail differently.
        .env("CASELAW_API_BASE_URL", "http://127.0.0.1:9")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires existing text file"));
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    caselaw_fetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Download case-law PDFs"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    caselaw_fetch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("caselaw-fetch"));
}

/// Full run against a mock API: one download, one zero-result query.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_full_run_writes_pdf_and_log() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    let work_dir = TempDir::new().unwrap();
    std::fs::create_dir(work_dir.path().join("downloads")).unwrap();
    std::fs::create_dir(work_dir.path().join("logs")).unwrap();
    std::fs::write(
        work_dir.path().join("cases.txt"),
        "Marbury v. Madison\nNonexistent Case XYZ123\n",
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/cases/"))
        .and(query_param("search", "Marbury v. Madison"))
        .and(header("authorization", "Token e2e-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "id": 12345,
                "name": "Marbury v. Madison",
                "url": "https://api.case.law/v1/cases/12345/"
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cases/"))
        .and(query_param("search", "Nonexistent Case XYZ123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cases/12345/"))
        .and(query_param("format", "pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF e2e".to_vec()))
        .mount(&server)
        .await;

    caselaw_fetch()
        .current_dir(work_dir.path())
        .env("CASELAW_API_BASE_URL", server.uri())
        .env("caselaw_api", "e2e-token")
        .arg("cases.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESSFULLY DOWNLOADED Marbury v. Madison",
        ))
        .stdout(predicate::str::contains(
            "FAILED TO LOAD Nonexistent Case XYZ123",
        ));

    let pdf = work_dir.path().join("downloads").join("Marbury v Madison.pdf");
    assert_eq!(std::fs::read(pdf).unwrap(), b"%PDF e2e");

    let logs: Vec<_> = std::fs::read_dir(work_dir.path().join("logs"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(logs.len(), 1);
    let name = logs[0].file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("Searchlog_") && name.ends_with(".csv"), "got: {name}");
    let csv = std::fs::read_to_string(&logs[0]).unwrap();
    assert_eq!(csv.lines().count(), 2, "header plus one row: {csv}");
}

/// An HTTP error mid-batch aborts the run with a non-zero exit and no log.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_server_error_aborts_without_log() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    let work_dir = TempDir::new().unwrap();
    std::fs::create_dir(work_dir.path().join("downloads")).unwrap();
    std::fs::create_dir(work_dir.path().join("logs")).unwrap();
    std::fs::write(work_dir.path().join("cases.txt"), "Anything\n").unwrap();

    Mock::given(method("GET"))
        .and(path("/cases/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    caselaw_fetch()
        .current_dir(work_dir.path())
        .env("CASELAW_API_BASE_URL", server.uri())
        .env("caselaw_api", "e2e-token")
        .arg("cases.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("batch aborted"));

    assert_eq!(
        std::fs::read_dir(work_dir.path().join("logs")).unwrap().count(),
        0
    );
}
