//! Benchmark execution engine.
//!
//! The [`Executor`] loads evaluation blocks, narrows them to what the caller
//! asked for, and sends every selected case to every target model in order.
//! Results are persisted through a [`ReportWriter`] as they arrive, and the
//! counts come back as a [`RunSummary`].
//!
//! Effects are strictly sequential: each chat call and report write is
//! awaited before the next begins. A failed chat call is recorded as an
//! `Error: ...` output and never stops the sweep; configuration problems
//! abort before the report writer is touched.

pub mod plan;
pub mod progress;
pub mod summary;

pub use plan::{category_for, filter_active, filter_by_id, PlannedBlock, BENCHMARKS_CATEGORY};
pub use progress::{ProgressCallback, ProgressEvent};
pub use summary::{BlockSummary, ModelSummary, RunSummary};

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::bail_config;
use crate::block::{load_blocks, EvaluationBlock, TestCase};
use crate::client::{ChatClient, Message};
use crate::error::Result;
use crate::report::{ReportWriter, RunEntry};
use crate::trace_time;
use progress::ProgressTracker;

/// What to run
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Directory of block documents used when no target file is given
    pub blocks_dir: PathBuf,
    /// Target models, in execution order
    pub models: Vec<String>,
    /// Single file (or directory) overriding `blocks_dir`
    pub target_file: Option<PathBuf>,
    /// Run only the case with this id
    pub target_id: Option<String>,
}

impl RunRequest {
    pub fn new(blocks_dir: impl Into<PathBuf>, models: Vec<String>) -> Self {
        Self {
            blocks_dir: blocks_dir.into(),
            models,
            target_file: None,
            target_id: None,
        }
    }

    pub fn with_target_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_file = Some(path.into());
        self
    }

    pub fn with_target_id(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self
    }
}

/// Blocks and cases selected for a run, before anything is executed
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub category: Option<String>,
    pub blocks: Vec<PlannedBlock>,
    pub skipped_documents: Vec<crate::block::SkippedDocument>,
}

impl RunPlan {
    /// Cases per model
    pub fn cases_per_model(&self) -> usize {
        self.blocks.iter().map(PlannedBlock::len).sum()
    }

    pub fn block_ids(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.id().to_string()).collect()
    }
}

/// Resolve, load and filter the blocks for `request`.
///
/// Fails with a configuration error when the model list is empty, the
/// target id is missing or ambiguous, or nothing is left to run.
pub fn plan_run(request: &RunRequest) -> Result<RunPlan> {
    if request.models.is_empty() {
        bail_config!("no models specified");
    }

    let source = request
        .target_file
        .as_deref()
        .unwrap_or(request.blocks_dir.as_path());
    let loaded = load_blocks(source);
    let category = category_for(request.target_file.as_deref());

    // An explicitly targeted file runs regardless of the active flag
    let blocks: Vec<EvaluationBlock> = if request.target_file.is_none() {
        filter_active(loaded.blocks)
    } else {
        loaded.blocks
    };

    let blocks = match request.target_id.as_deref() {
        Some(target_id) => filter_by_id(blocks, target_id)?,
        None => blocks.into_iter().map(PlannedBlock::all).collect(),
    };

    if blocks.is_empty() {
        bail_config!("no evaluation blocks found in {}", source.display());
    }

    Ok(RunPlan {
        category,
        blocks,
        skipped_documents: loaded.skipped,
    })
}

/// Build the system + user messages for one case
pub fn build_messages(block: &EvaluationBlock, case: &TestCase) -> Vec<Message> {
    vec![
        Message::system(block.system_prompt_for(case)),
        Message::user(case.input.clone()),
    ]
}

/// Runs benchmark blocks against models
pub struct Executor<C, R> {
    client: C,
    reporter: R,
    on_progress: Option<ProgressCallback>,
}

impl<C: ChatClient, R: ReportWriter> Executor<C, R> {
    pub fn new(client: C, reporter: R) -> Self {
        Self {
            client,
            reporter,
            on_progress: None,
        }
    }

    /// Receive a [`ProgressEvent`] for the start and every finished case
    pub fn with_on_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Plan and execute a run
    pub async fn execute(&self, request: &RunRequest) -> Result<RunSummary> {
        let start_time = Utc::now();
        let plan = plan_run(request)?;
        self.execute_plan(&request.models, plan, start_time).await
    }

    async fn execute_plan(
        &self,
        models: &[String],
        plan: RunPlan,
        start_time: chrono::DateTime<Utc>,
    ) -> Result<RunSummary> {
        let block_ids = plan.block_ids();
        let total_cases = plan.cases_per_model() * models.len();

        debug!(
            category = ?plan.category,
            blocks = block_ids.len(),
            models = models.len(),
            total_cases,
            "execute"
        );

        let mut progress = ProgressTracker::new(self.on_progress.as_ref());
        progress.start(total_cases);

        let mut model_summaries = Vec::with_capacity(models.len());
        for model in models {
            let model_summary = self
                .run_model(model, &plan, &block_ids, &mut progress)
                .await?;
            info!(
                model = %model,
                completed = model_summary.completed_cases(),
                failed = model_summary.failed_cases(),
                "model finished"
            );
            model_summaries.push(model_summary);
        }

        let successful_cases = model_summaries.iter().map(ModelSummary::completed_cases).sum();
        let failed_cases = model_summaries.iter().map(ModelSummary::failed_cases).sum();

        debug_assert_eq!(progress.completed(), total_cases);

        Ok(RunSummary {
            start_time,
            end_time: Utc::now(),
            category: plan.category,
            models: model_summaries,
            total_cases,
            successful_cases,
            failed_cases,
            skipped_documents: plan.skipped_documents,
        })
    }

    async fn run_model(
        &self,
        model: &str,
        plan: &RunPlan,
        block_ids: &[String],
        progress: &mut ProgressTracker<'_>,
    ) -> Result<ModelSummary> {
        let run_dir = self
            .reporter
            .init_run(plan.category.as_deref(), model, block_ids)
            .await?;
        progress.model_started(model);

        let mut model_summary = ModelSummary {
            model: model.to_string(),
            blocks: Vec::with_capacity(plan.blocks.len()),
            run_dir: Some(run_dir.clone()),
        };

        for planned in &plan.blocks {
            let block = &planned.block;
            let mut block_summary = BlockSummary::new(block.id(), planned.len());

            for (idx, case) in planned.cases() {
                let succeeded = self.run_case(model, block, idx, case, &run_dir).await?;
                block_summary.record(succeeded);
                progress.advance(model, block.id(), idx, succeeded);
            }

            model_summary.blocks.push(block_summary);
        }

        Ok(model_summary)
    }

    /// Send one case and persist the result; returns whether the chat succeeded
    async fn run_case(
        &self,
        model: &str,
        block: &EvaluationBlock,
        idx: usize,
        case: &TestCase,
        run_dir: &Path,
    ) -> Result<bool> {
        let case_start = Instant::now();
        let messages = build_messages(block, case);

        let (output, succeeded) = match self.client.chat(model, &messages).await {
            Ok(output) => (output, true),
            Err(e) => {
                warn!(model, block = block.id(), case = idx, error = %e, "case failed");
                (format!("Error: {e}"), false)
            }
        };
        trace_time!(case_start, "chat");

        let entry = RunEntry {
            block_id: block.id().to_string(),
            case_index: idx,
            input: case.input.clone(),
            output,
            model: model.to_string(),
            expected: case.expected.clone(),
            context: case.context.clone(),
            criteria: case.criteria.clone(),
            grading_template: block.grading_template().map(str::to_string),
            timestamp: Utc::now(),
        };
        self.reporter.write_entry(run_dir, &entry).await?;

        debug!(
            model,
            block = block.id(),
            case = idx,
            succeeded,
            elapsed = ?case_start.elapsed(),
            "case"
        );
        Ok(succeeded)
    }
}
