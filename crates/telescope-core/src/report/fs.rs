//! Markdown reports on the local filesystem.
//!
//! Layout: `<reports_dir>/[<category>/]<model>/<timestamp>/<block>.md`, where
//! the timestamp is `%Y%m%d%H%M%S.<millis>` in UTC so runs sort lexically.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::{sanitize_block_id, sanitize_model_name, ReportWriter, RunEntry};
use crate::error::{Result, TelescopeError};

/// Title line at the top of every block report
pub const REPORT_TITLE: &str = "# Telescope Run Report";

/// Fixed-width, lexically sortable run directory name
pub fn run_timestamp(now: &DateTime<Utc>) -> String {
    now.format("%Y%m%d%H%M%S%.3f").to_string()
}

/// Header written when a block report is created
pub fn format_header(model: &str, now: &DateTime<Utc>) -> String {
    format!(
        "{REPORT_TITLE}\n**Model**: {model}\n**Date**: {}\n\n",
        now.to_rfc3339()
    )
}

/// Render one entry as a Markdown record
pub fn format_entry(entry: &RunEntry) -> String {
    let mut lines = vec![
        format!("## Block: {} (Case {})", entry.block_id, entry.case_index),
        format!("- **Input**: {}", entry.input),
        format!("- **Output**: {}", entry.output),
    ];
    if let Some(expected) = entry.expected.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("- **Expected**: {expected}"));
    }
    if let Some(context) = entry.context.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("- **Context**: {context}"));
    }
    lines.push("---\n".to_string());
    lines.join("\n")
}

/// Report path for a block inside a run directory
pub fn block_report_path(run_dir: &Path, block_id: &str) -> PathBuf {
    run_dir.join(format!("{}.md", sanitize_block_id(block_id)))
}

/// Writes one Markdown document per block per run
#[derive(Debug, Clone)]
pub struct FileSystemReporter {
    reports_dir: PathBuf,
}

impl FileSystemReporter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    fn model_dir(&self, category: Option<&str>, model: &str) -> PathBuf {
        let base = match category.filter(|c| !c.is_empty()) {
            Some(category) => self.reports_dir.join(category),
            None => self.reports_dir.clone(),
        };
        base.join(sanitize_model_name(model))
    }

    /// Create a fresh run directory, stepping the timestamp forward by a
    /// millisecond whenever the name is already taken.
    async fn create_run_dir(&self, model_dir: &Path) -> Result<(PathBuf, DateTime<Utc>)> {
        fs::create_dir_all(model_dir)
            .await
            .map_err(|e| TelescopeError::io_operation("create", model_dir.display(), e))?;

        let mut now = Utc::now();
        loop {
            let run_dir = model_dir.join(run_timestamp(&now));
            match fs::create_dir(&run_dir).await {
                Ok(()) => return Ok((run_dir, now)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    now += Duration::milliseconds(1);
                }
                Err(e) => {
                    return Err(TelescopeError::io_operation("create", run_dir.display(), e))
                }
            }
        }
    }
}

#[async_trait]
impl ReportWriter for FileSystemReporter {
    async fn init_run(
        &self,
        category: Option<&str>,
        model: &str,
        block_ids: &[String],
    ) -> Result<PathBuf> {
        let model_dir = self.model_dir(category, model);
        let (run_dir, now) = self.create_run_dir(&model_dir).await?;

        let header = format_header(model, &now);
        for block_id in block_ids {
            let path = block_report_path(&run_dir, block_id);
            fs::write(&path, &header)
                .await
                .map_err(|e| TelescopeError::io_operation("write", path.display(), e))?;
        }

        debug!(run_dir = %run_dir.display(), blocks = block_ids.len(), "init_run");
        Ok(run_dir)
    }

    async fn write_entry(&self, run_dir: &Path, entry: &RunEntry) -> Result<()> {
        let path = block_report_path(run_dir, &entry.block_id);

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(TelescopeError::ReportFileMissing { path });
        }

        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .await
            .map_err(|e| TelescopeError::io_operation("open", path.display(), e))?;
        file.write_all(format_entry(entry).as_bytes())
            .await
            .map_err(|e| TelescopeError::io_operation("append to", path.display(), e))?;
        file.flush()
            .await
            .map_err(|e| TelescopeError::io_operation("flush", path.display(), e))?;

        Ok(())
    }
}
