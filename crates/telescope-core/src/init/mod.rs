//! Project scaffolding for `tls init`.
//!
//! Initialization is idempotent: existing files are never overwritten and a
//! second run over the same directory creates nothing.

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CONFIG_FILE;
use crate::error::{Result, TelescopeError};
use templates::{DEFAULT_CONFIG, GITIGNORE_ENTRIES, SAMPLE_BLOCKS};

/// Directory holding block documents in a fresh project
pub const BLOCKS_DIR: &str = "benchmarks";

/// Directory receiving reports in a fresh project
pub const REPORTS_DIR: &str = "reports";

pub const GITIGNORE_FILE: &str = ".gitignore";

/// What `tls init` did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub created_paths: Vec<PathBuf>,
    pub gitignore_updated: bool,
    pub git_initialized: bool,
}

/// Scaffolds new projects
#[derive(Debug, Clone)]
pub struct Initializer {
    init_git: bool,
}

impl Default for Initializer {
    fn default() -> Self {
        Self { init_git: true }
    }
}

impl Initializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip `git init`
    pub fn without_git(mut self) -> Self {
        self.init_git = false;
        self
    }

    /// Initialize a project at `root`
    pub fn execute(&self, root: &Path) -> Result<InitReport> {
        let mut report = InitReport::default();

        ensure_dir(root, &mut report)?;
        let blocks_dir = root.join(BLOCKS_DIR);
        ensure_dir(&blocks_dir, &mut report)?;
        ensure_dir(&root.join(REPORTS_DIR), &mut report)?;

        ensure_file(&root.join(CONFIG_FILE), DEFAULT_CONFIG, &mut report)?;
        for (name, contents) in SAMPLE_BLOCKS {
            ensure_file(&blocks_dir.join(name), contents, &mut report)?;
        }

        let gitignore = root.join(GITIGNORE_FILE);
        let gitignore_existed = gitignore.exists();
        for entry in GITIGNORE_ENTRIES {
            report.gitignore_updated |= ensure_gitignore_entry(&gitignore, entry)?;
        }
        if !gitignore_existed && gitignore.exists() {
            report.created_paths.push(gitignore);
        }

        if self.init_git {
            report.git_initialized = init_git_repo(root);
        }

        debug!(
            root = %root.display(),
            created = report.created_paths.len(),
            gitignore_updated = report.gitignore_updated,
            git_initialized = report.git_initialized,
            "init"
        );
        Ok(report)
    }
}

fn ensure_dir(path: &Path, report: &mut InitReport) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)
        .map_err(|e| TelescopeError::io_operation("create directory", path.display(), e))?;
    report.created_paths.push(path.to_path_buf());
    Ok(())
}

fn ensure_file(path: &Path, contents: &str, report: &mut InitReport) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, contents)
        .map_err(|e| TelescopeError::io_operation("write", path.display(), e))?;
    report.created_paths.push(path.to_path_buf());
    Ok(())
}

/// Append `entry` to the `.gitignore` at `path` unless already listed.
///
/// Returns whether the file changed.
pub fn ensure_gitignore_entry(path: &Path, entry: &str) -> Result<bool> {
    let entry = entry.trim_end_matches('\n');

    let content = if path.exists() {
        let mut content = fs::read_to_string(path)?;
        if content.lines().any(|l| l.trim() == entry.trim()) {
            return Ok(false);
        }
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(entry);
        content.push('\n');
        content
    } else {
        format!("{entry}\n")
    };

    fs::write(path, content)?;
    Ok(true)
}

/// Run `git init` in `root` when it is not already a repository.
///
/// Returns false when a repository exists or git could not be run.
pub fn init_git_repo(root: &Path) -> bool {
    if root.join(".git").exists() {
        return false;
    }

    match Command::new("git")
        .arg("-C")
        .arg(root)
        .arg("init")
        .arg("--quiet")
        .output()
    {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            warn!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git init failed"
            );
            false
        }
        Err(e) => {
            debug!(error = %e, "git not available");
            false
        }
    }
}
