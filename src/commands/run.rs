//! `tls run` command - execute benchmark blocks
//!
//! Resolves configuration (file, environment, flags), wires the chat client
//! and filesystem reporter into an executor, and renders the run summary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::cli::paths::resolve_cli_path;
use crate::cli::{Cli, OutputFormat, RunArgs};
use crate::commands::progress::RunProgress;
use telescope_core::bail_config;
use telescope_core::client::{ChatClient, HttpChatClient, StaticChatClient};
use telescope_core::config::{
    normalize_models, resolve_path, Config, Settings, CONFIG_FILE, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_SECS,
};
use telescope_core::error::{Result, TelescopeError};
use telescope_core::executor::{Executor, RunRequest, RunSummary};
use telescope_core::report::FileSystemReporter;

/// Everything a run needs, after config, environment and flags are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRun {
    pub blocks_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub models: Vec<String>,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub use_mock: bool,
}

/// Merge `telescope.toml`, environment settings, and command-line flags.
///
/// The configuration file is required unless the mock client is selected
/// and models come from the command line.
pub fn resolve(root: &Path, args: &RunArgs, settings: &Settings) -> Result<ResolvedRun> {
    let use_mock = args.mock || settings.use_mock_llm;
    let cli_models = normalize_models(&args.models);

    let config = if use_mock && !cli_models.is_empty() && !root.join(CONFIG_FILE).exists() {
        None
    } else {
        Some(Config::load(root)?)
    };

    let models = if cli_models.is_empty() {
        config
            .as_ref()
            .map(|c| c.target.models.clone())
            .unwrap_or_default()
    } else {
        cli_models
    };
    if models.is_empty() {
        bail_config!("No models specified. Configure them in {CONFIG_FILE} or use --model.");
    }

    let blocks_dir = match (&args.blocks_dir, &config) {
        (Some(dir), _) => resolve_cli_path(dir),
        (None, Some(config)) => config.blocks_dir(root),
        (None, None) => resolve_path(root, Path::new("benchmarks")),
    };
    let reports_dir = match &config {
        Some(config) => config.reports_dir(root),
        None => resolve_path(root, Path::new("reports")),
    };

    let timeout_secs = args
        .timeout
        .or(config.as_ref().map(|c| c.target.timeout))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(ResolvedRun {
        blocks_dir,
        reports_dir,
        models,
        endpoint: config
            .as_ref()
            .map(|c| c.target.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        api_key: settings.effective_api_key(config.as_ref()).map(str::to_string),
        timeout: Duration::from_secs(timeout_secs),
        use_mock,
    })
}

/// Execute the run command
pub fn execute(cli: &Cli, root: &Path, args: &RunArgs) -> Result<()> {
    let settings = Settings::from_env();
    let resolved = resolve(root, args, &settings)?;
    debug!(
        blocks_dir = %resolved.blocks_dir.display(),
        models = ?resolved.models,
        mock = resolved.use_mock,
        "run"
    );

    let client: Box<dyn ChatClient> = if resolved.use_mock {
        info!("using in-memory chat client");
        Box::new(match &args.mock_response {
            Some(text) => StaticChatClient::new(text.clone()),
            None => StaticChatClient::default(),
        })
    } else {
        Box::new(HttpChatClient::new(
            &resolved.endpoint,
            resolved.api_key.as_deref(),
            resolved.timeout,
        )?)
    };
    let reporter = FileSystemReporter::new(&resolved.reports_dir);

    let mut request = RunRequest::new(&resolved.blocks_dir, resolved.models.clone());
    if let Some(file) = &args.file {
        request = request.with_target_file(resolve_cli_path(file));
    }
    if let Some(id) = &args.case_id {
        request = request.with_target_id(id.clone());
    }

    let progress = if cli.quiet || cli.format == OutputFormat::Json {
        RunProgress::hidden()
    } else {
        RunProgress::new()
    };
    let executor = Executor::new(client, reporter).with_on_progress(progress.callback());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| TelescopeError::io_operation("start", "async runtime", e))?;
    let result = runtime.block_on(executor.execute(&request));
    progress.finish();
    let summary = result?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Human => print!("{}", render_summary(&summary)),
    }

    Ok(())
}

/// Human-readable run summary
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str("\nRun Summary\n");
    out.push_str(&format!("  Duration: {:.2}s\n", summary.duration_seconds()));
    out.push_str(&format!("  Total cases: {}\n", summary.total_cases));
    out.push_str(&format!("  Successful: {}\n", summary.successful_cases));
    if summary.failed_cases > 0 {
        out.push_str(&format!("  Failed: {}\n", summary.failed_cases));
    }
    if !summary.skipped_documents.is_empty() {
        out.push_str(&format!(
            "  Skipped documents: {}\n",
            summary.skipped_documents.len()
        ));
        for skipped in &summary.skipped_documents {
            out.push_str(&format!(
                "    {}: {}\n",
                skipped.path.display(),
                skipped.reason
            ));
        }
    }

    for model in &summary.models {
        out.push_str(&format!("\n  Model: {}\n", model.model));
        if let Some(run_dir) = &model.run_dir {
            out.push_str(&format!("    Report: {}\n", run_dir.display()));
        }
    }

    out
}
