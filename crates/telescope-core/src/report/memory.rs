//! In-memory report writer for dry runs and tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ReportWriter, RunEntry};
use crate::error::{Result, TelescopeError};

/// A run opened on an [`InMemoryReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRun {
    pub run_dir: PathBuf,
    pub category: Option<String>,
    pub model: String,
    pub block_ids: Vec<String>,
    /// Entries grouped by block id, in write order
    pub entries: BTreeMap<String, Vec<RunEntry>>,
}

/// Keeps every run and entry in memory
#[derive(Debug, Default)]
pub struct InMemoryReporter {
    runs: Mutex<Vec<MemoryRun>>,
}

impl InMemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every run opened so far
    pub fn runs(&self) -> Vec<MemoryRun> {
        self.runs.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// All entries across all runs, in write order per run
    pub fn all_entries(&self) -> Vec<RunEntry> {
        self.runs()
            .into_iter()
            .flat_map(|run| {
                let order = run.block_ids.clone();
                let mut entries = run.entries;
                order
                    .into_iter()
                    .flat_map(move |id| entries.remove(&id).unwrap_or_default())
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

#[async_trait]
impl ReportWriter for InMemoryReporter {
    async fn init_run(
        &self,
        category: Option<&str>,
        model: &str,
        block_ids: &[String],
    ) -> Result<PathBuf> {
        let mut runs = self.runs.lock().unwrap_or_else(|p| p.into_inner());
        let run_dir = PathBuf::from(format!("mock://run/{}", runs.len() + 1));

        runs.push(MemoryRun {
            run_dir: run_dir.clone(),
            category: category.map(str::to_string),
            model: model.to_string(),
            block_ids: block_ids.to_vec(),
            entries: block_ids
                .iter()
                .map(|id| (id.clone(), Vec::new()))
                .collect(),
        });

        Ok(run_dir)
    }

    async fn write_entry(&self, run_dir: &Path, entry: &RunEntry) -> Result<()> {
        let mut runs = self.runs.lock().unwrap_or_else(|p| p.into_inner());
        let missing = || TelescopeError::ReportFileMissing {
            path: run_dir.join(&entry.block_id),
        };

        let run = runs
            .iter_mut()
            .find(|r| r.run_dir == run_dir)
            .ok_or_else(missing)?;
        run.entries
            .get_mut(&entry.block_id)
            .ok_or_else(missing)?
            .push(entry.clone());

        Ok(())
    }
}
