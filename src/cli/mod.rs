//! CLI argument parsing for tls
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod paths;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use output::OutputFormat;

/// Telescope - LLM benchmarking and evaluation tool
#[derive(Parser, Debug)]
#[command(name = "tls")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new telescope project
    Init {
        /// Directory to initialize the project in
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Run benchmark blocks against the configured models
    Run(RunArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Directory containing block files (defaults to the configured one)
    #[arg(long = "blocks", short = 'b')]
    pub blocks_dir: Option<PathBuf>,

    /// Run a single block file (or directory), including inactive blocks
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Run only the test case with this id
    #[arg(long = "id", short = 'i')]
    pub case_id: Option<String>,

    /// Model to run; may be repeated (overrides configured models)
    #[arg(long = "model", short = 'm')]
    pub models: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, short = 't')]
    pub timeout: Option<u64>,

    /// Use the in-memory chat client instead of the configured endpoint
    #[arg(long)]
    pub mock: bool,

    /// Reply returned by the in-memory chat client
    #[arg(long, requires = "mock")]
    pub mock_response: Option<String>,
}
