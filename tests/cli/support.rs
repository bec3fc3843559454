use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for tls with a clean environment
pub fn tls() -> Command {
    let mut cmd = cargo_bin_cmd!("tls");
    cmd.env_remove("TLS_USE_MOCK_LLM")
        .env_remove("TLS_API_KEY")
        .env_remove("TLS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Initialized project in a temporary directory
#[allow(dead_code)]
pub fn setup_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    tls().current_dir(dir.path()).arg("init").assert().success();
    dir
}

/// Write a block document with the given id and case ids into `dir`
#[allow(dead_code)]
pub fn write_block(dir: &Path, file: &str, id: &str, case_ids: &[&str]) {
    let dataset: Vec<serde_json::Value> = case_ids
        .iter()
        .map(|case_id| {
            serde_json::json!({
                "id": case_id,
                "input": format!("input for {case_id}"),
                "expected": format!("expected {case_id}"),
            })
        })
        .collect();
    let block = serde_json::json!({
        "metadata": { "id": id },
        "prompts": { "system": "You are a test assistant." },
        "dataset": dataset,
    });
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file), serde_json::to_string_pretty(&block).unwrap()).unwrap();
}

/// Write a minimal telescope.toml pointing at `endpoint`
#[allow(dead_code)]
pub fn write_config(root: &Path, models: &[&str], endpoint: &str) {
    let models = models
        .iter()
        .map(|m| format!("\"{m}\""))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        root.join("telescope.toml"),
        format!(
            "[project]\nname = \"test\"\n\n[target]\nmodels = [{models}]\nendpoint = \"{endpoint}\"\ntimeout = 5\n"
        ),
    )
    .unwrap();
}

/// Every block report written under `reports_dir`
#[allow(dead_code)]
pub fn report_files(reports_dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = walk(reports_dir)
        .into_iter()
        .filter(|p| p.extension().is_some_and(|e| e == "md"))
        .collect();
    files.sort();
    files
}

fn walk(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut out = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            out.extend(walk(&path));
        } else {
            out.push(path);
        }
    }
    out
}
