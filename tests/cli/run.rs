use std::fs;

use crate::cli::support::{report_files, setup_project, tls, write_block, write_config};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Run command tests (in-memory chat client)
// ============================================================================

#[test]
fn test_run_without_config_fails_with_config_error() {
    let dir = tempdir().unwrap();

    tls()
        .current_dir(dir.path())
        .arg("run")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("telescope.toml not found"));
}

#[test]
fn test_run_json_error_envelope() {
    let dir = tempdir().unwrap();

    let output = tls()
        .current_dir(dir.path())
        .args(["--format", "json", "run"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "config_error");
}

#[test]
fn test_run_initialized_project_with_mock() {
    let dir = setup_project();

    tls()
        .current_dir(dir.path())
        .args(["run", "--mock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cases: 10"))
        .stdout(predicate::str::contains("Successful: 10"))
        .stdout(predicate::str::contains("Failed").not());

    let reports = report_files(&dir.path().join("reports"));
    let names: Vec<_> = reports
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["reasoning-progressive.md", "structured-output-progressive.md"]
    );
    assert!(reports[0]
        .to_string_lossy()
        .contains("benchmarks/qwen3-vl-8b-instruct-q4_K_M"));

    let report = fs::read_to_string(&reports[0]).unwrap();
    assert!(report.starts_with("# Telescope Run Report\n**Model**: qwen3-vl:8b-instruct-q4_K_M\n"));
    assert_eq!(report.matches("## Block: reasoning-progressive").count(), 5);
    assert!(report.contains("- **Output**: Mock response"));
}

#[test]
fn test_mock_enabled_through_environment() {
    let dir = setup_project();

    tls()
        .current_dir(dir.path())
        .env("TLS_USE_MOCK_LLM", "true")
        .args(["run", "--id", "100004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cases: 1"));

    let reports = report_files(&dir.path().join("reports"));
    assert_eq!(reports.len(), 1);
    let report = fs::read_to_string(&reports[0]).unwrap();
    // original dataset position is kept
    assert!(report.contains("## Block: reasoning-progressive (Case 3)"));
}

#[test]
fn test_run_mock_without_config_uses_cli_models() {
    let dir = tempdir().unwrap();
    write_block(&dir.path().join("benchmarks"), "a.json", "alpha", &["1", "2"]);

    let output = tls()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "run",
            "--mock",
            "--mock-response",
            "pong",
            "-m",
            "m1",
            "-m",
            "m2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_cases"], 4);
    assert_eq!(summary["successful_cases"], 4);
    assert_eq!(summary["failed_cases"], 0);
    assert_eq!(summary["models"].as_array().unwrap().len(), 2);
    assert_eq!(summary["category"], "benchmarks");

    let reports = report_files(&dir.path().join("reports"));
    assert_eq!(reports.len(), 2);
    assert!(fs::read_to_string(&reports[0])
        .unwrap()
        .contains("- **Output**: pong"));
}

#[test]
fn test_run_unknown_id_is_config_error() {
    let dir = setup_project();

    tls()
        .current_dir(dir.path())
        .args(["run", "--mock", "--id", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no test case found with id"));

    assert!(report_files(&dir.path().join("reports")).is_empty());
}

#[test]
fn test_run_duplicate_id_is_config_error() {
    let dir = tempdir().unwrap();
    let blocks = dir.path().join("benchmarks");
    write_block(&blocks, "a.json", "alpha", &["dup"]);
    write_block(&blocks, "b.json", "beta", &["dup"]);

    tls()
        .current_dir(dir.path())
        .args(["run", "--mock", "-m", "m", "--id", "dup"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("IDs must be unique"));
}

#[test]
fn test_run_empty_blocks_dir_is_config_error() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("benchmarks")).unwrap();

    tls()
        .current_dir(dir.path())
        .args(["run", "--mock", "-m", "m"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no evaluation blocks found"));
}

#[test]
fn test_run_target_file_sets_category_and_includes_inactive() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), &["m1"], "http://127.0.0.1:9");
    let suite = dir.path().join("suites/smoke");
    fs::create_dir_all(&suite).unwrap();
    fs::write(
        suite.join("off.yaml"),
        "metadata:\n  id: off\n  active: false\nprompts:\n  system: s\ndataset:\n  - input: hi\n",
    )
    .unwrap();

    tls()
        .current_dir(dir.path())
        .args(["run", "--mock", "--file", "suites/smoke/off.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cases: 1"));

    let reports = report_files(&dir.path().join("reports"));
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with(dir.path().join("reports/smoke/m1")));
}

#[test]
fn test_run_blocks_flag_overrides_config() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), &["m1"], "http://127.0.0.1:9");
    write_block(&dir.path().join("other"), "x.json", "x", &["1", "2", "3"]);

    tls()
        .current_dir(dir.path())
        .args(["run", "--mock", "--blocks", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cases: 3"));
}

#[test]
fn test_run_with_root_flag() {
    let project = setup_project();
    let elsewhere = tempdir().unwrap();

    tls()
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(project.path())
        .args(["run", "--mock", "--id", "200001"])
        .assert()
        .success();

    assert_eq!(report_files(&project.path().join("reports")).len(), 1);
}

#[test]
fn test_repeated_runs_get_separate_directories() {
    let dir = setup_project();

    for _ in 0..2 {
        tls()
            .current_dir(dir.path())
            .args(["--quiet", "run", "--mock", "--id", "100001"])
            .assert()
            .success();
    }

    assert_eq!(report_files(&dir.path().join("reports")).len(), 2);
}
