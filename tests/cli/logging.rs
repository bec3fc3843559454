use crate::cli::support::{tls, write_block};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_verbose_emits_debug_logs() {
    let dir = tempdir().unwrap();
    write_block(&dir.path().join("benchmarks"), "a.json", "a", &["1"]);

    tls()
        .current_dir(dir.path())
        .args(["--verbose", "run", "--mock", "-m", "m1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_blocks"));
}

#[test]
fn test_log_level_filters_debug() {
    let dir = tempdir().unwrap();
    write_block(&dir.path().join("benchmarks"), "a.json", "a", &["1"]);

    tls()
        .current_dir(dir.path())
        .args(["--log-level", "error", "run", "--mock", "-m", "m1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_blocks").not());
}

#[test]
fn test_log_json_format() {
    let dir = tempdir().unwrap();
    write_block(&dir.path().join("benchmarks"), "a.json", "a", &["1"]);
    std::fs::write(dir.path().join("benchmarks/broken.json"), "{").unwrap();

    let output = tls()
        .current_dir(dir.path())
        .args(["--log-json", "--quiet", "run", "--mock", "-m", "m1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.contains("skipping block document"))
        .expect("warning for broken document");
    let json: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["level"], "WARN");
}
