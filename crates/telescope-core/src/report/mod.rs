//! Report writers: where run results are persisted.
//!
//! A run is opened once per model with [`ReportWriter::init_run`], which
//! prepares storage for every block up front. Each case result is then
//! appended with [`ReportWriter::write_entry`].

pub mod fs;
pub mod memory;

pub use fs::FileSystemReporter;
pub use memory::InMemoryReporter;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::GradingCriteria;
use crate::error::Result;

/// One executed test case, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunEntry {
    pub block_id: String,
    /// Position of the case in its block's dataset
    pub case_index: usize,
    pub input: String,
    /// Model reply, or `Error: <cause>` when the call failed
    pub output: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<GradingCriteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading_template: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Destination for run results
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Open a new run for `model` and prepare storage for every block.
    ///
    /// Returns the run location handed back to [`write_entry`](Self::write_entry).
    async fn init_run(
        &self,
        category: Option<&str>,
        model: &str,
        block_ids: &[String],
    ) -> Result<PathBuf>;

    /// Append one entry to its block's report within `run_dir`
    async fn write_entry(&self, run_dir: &Path, entry: &RunEntry) -> Result<()>;
}

#[async_trait]
impl<T: ReportWriter + ?Sized> ReportWriter for std::sync::Arc<T> {
    async fn init_run(
        &self,
        category: Option<&str>,
        model: &str,
        block_ids: &[String],
    ) -> Result<PathBuf> {
        (**self).init_run(category, model, block_ids).await
    }

    async fn write_entry(&self, run_dir: &Path, entry: &RunEntry) -> Result<()> {
        (**self).write_entry(run_dir, entry).await
    }
}

/// Make a model name safe to use as a path component.
///
/// `:`, `/`, `\` and spaces become `-`.
pub fn sanitize_model_name(model: &str) -> String {
    model
        .chars()
        .map(|c| match c {
            ':' | '/' | '\\' | ' ' => '-',
            other => other,
        })
        .collect()
}

/// Make a block id safe to use as a file name
pub fn sanitize_block_id(block_id: &str) -> String {
    block_id
        .chars()
        .map(|c| match c {
            '/' | '\\' | ' ' => '-',
            other => other,
        })
        .collect()
}
