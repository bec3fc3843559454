use std::fs;

use crate::cli::support::{report_files, tls, write_block, write_config};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Run command tests against an HTTP endpoint
// ============================================================================

fn completion(content: &str) -> serde_json::Value {
    json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_against_http_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer dummy"))
        .and(body_partial_json(json!({ "model": "m1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("42")))
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    write_config(dir.path(), &["m1"], &server.uri());
    write_block(&dir.path().join("benchmarks"), "a.json", "alpha", &["1", "2"]);

    tls()
        .current_dir(dir.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successful: 2"));

    let reports = report_files(&dir.path().join("reports"));
    let report = fs::read_to_string(&reports[0]).unwrap();
    assert!(report.contains("- **Output**: 42"));
    assert!(report.contains("- **Expected**: expected 1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_failures_are_recorded_and_run_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "model": "bad" })))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "model": "good" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    write_config(dir.path(), &["bad", "good"], &server.uri());
    write_block(&dir.path().join("benchmarks"), "a.json", "alpha", &["1"]);

    let output = tls()
        .current_dir(dir.path())
        .args(["--format", "json", "run"])
        .env("TLS_API_KEY", "sk-test")
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_cases"], 2);
    assert_eq!(summary["failed_cases"], 1);
    assert_eq!(summary["successful_cases"], 1);

    let bad_report = report_files(&dir.path().join("reports/benchmarks/bad"));
    let text = fs::read_to_string(&bad_report[0]).unwrap();
    assert!(text.contains("- **Output**: Error: API request failed: 500"));
}

#[test]
fn test_invalid_endpoint_is_config_error() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), &["m1"], "not a url");
    write_block(&dir.path().join("benchmarks"), "a.json", "alpha", &["1"]);

    tls().current_dir(dir.path()).arg("run").assert().code(3);
}
