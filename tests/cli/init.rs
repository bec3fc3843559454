use crate::cli::support::tls;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_project() {
    let dir = tempdir().unwrap();

    tls()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("Next steps:"));

    assert!(dir.path().join("telescope.toml").is_file());
    assert!(dir.path().join("benchmarks/structured_output.json").is_file());
    assert!(dir.path().join("benchmarks/reasoning.json").is_file());
    assert!(dir.path().join("reports").is_dir());

    let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l == "reports/"));
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    tls().current_dir(dir.path()).arg("init").assert().success();

    tls()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:").not());
}

#[test]
fn test_init_into_new_subdirectory() {
    let dir = tempdir().unwrap();

    tls()
        .current_dir(dir.path())
        .args(["init", "nested/project"])
        .assert()
        .success();

    assert!(dir.path().join("nested/project/telescope.toml").is_file());
}

#[test]
fn test_init_json_output() {
    let dir = tempdir().unwrap();

    let output = tls()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["created"].as_array().unwrap().len() >= 5);
    assert_eq!(json["gitignore_updated"], true);
}
