use crate::cli::support::tls;
use predicates::prelude::*;

#[test]
fn test_no_command_prints_banner() {
    tls()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tls "))
        .stdout(predicate::str::contains("tls --help"));
}

#[test]
fn test_version_flag() {
    tls()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    tls().args(["run", "--bogus"]).assert().code(2);
}

#[test]
fn test_unknown_flag_json_envelope() {
    let output = tls()
        .args(["--format", "json", "run", "--bogus"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}
