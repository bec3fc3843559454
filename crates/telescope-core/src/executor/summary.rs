//! Run summaries handed back to the caller.
//!
//! These are built while the run progresses and never persisted.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::block::SkippedDocument;

/// Outcome counts for one block under one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    pub block_id: String,
    pub total_cases: usize,
    pub completed_cases: usize,
    pub failed_cases: usize,
}

impl BlockSummary {
    pub fn new(block_id: impl Into<String>, total_cases: usize) -> Self {
        Self {
            block_id: block_id.into(),
            total_cases,
            completed_cases: 0,
            failed_cases: 0,
        }
    }

    pub fn record(&mut self, succeeded: bool) {
        if succeeded {
            self.completed_cases += 1;
        } else {
            self.failed_cases += 1;
        }
    }
}

/// Everything one model did during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub model: String,
    pub blocks: Vec<BlockSummary>,
    /// Location returned by the report writer for this model's run
    pub run_dir: Option<PathBuf>,
}

impl ModelSummary {
    pub fn completed_cases(&self) -> usize {
        self.blocks.iter().map(|b| b.completed_cases).sum()
    }

    pub fn failed_cases(&self) -> usize {
        self.blocks.iter().map(|b| b.failed_cases).sum()
    }
}

/// Overall summary of a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: Option<String>,
    pub models: Vec<ModelSummary>,
    pub total_cases: usize,
    pub successful_cases: usize,
    pub failed_cases: usize,
    /// Documents the loader could not parse
    pub skipped_documents: Vec<SkippedDocument>,
}

impl RunSummary {
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 1000.0
    }
}
