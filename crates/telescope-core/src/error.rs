//! Error types and exit codes for telescope
//!
//! Exit codes:
//! - 0: Success (including runs where individual cases failed)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Configuration error (missing config, no blocks, bad target id)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the `tls` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Configuration error (3)
    Config = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while preparing or executing a benchmark run
#[derive(Error, Debug)]
pub enum TelescopeError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Configuration errors (exit code 3)
    #[error("{0}")]
    Config(String),

    #[error("report file not found: {path:?}")]
    ReportFileMissing { path: PathBuf },

    // Per-case failures, recorded by the executor rather than propagated
    #[error("{0}")]
    Network(String),

    #[error("failed to parse {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl TelescopeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        TelescopeError::Config(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        TelescopeError::Network(message.into())
    }

    /// Create a parse error for a document on disk
    pub fn parse(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        TelescopeError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        TelescopeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Whether this error belongs to the configuration class
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            TelescopeError::Config(_) | TelescopeError::ReportFileMissing { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TelescopeError::UsageError(_) => ExitCode::Usage,

            TelescopeError::Config(_) | TelescopeError::ReportFileMissing { .. } => {
                ExitCode::Config
            }

            TelescopeError::Network(_)
            | TelescopeError::Parse { .. }
            | TelescopeError::Io(_)
            | TelescopeError::Json(_)
            | TelescopeError::Yaml(_)
            | TelescopeError::Toml(_)
            | TelescopeError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TelescopeError::UsageError(_) => "usage_error",
            TelescopeError::Config(_) => "config_error",
            TelescopeError::ReportFileMissing { .. } => "report_file_missing",
            TelescopeError::Network(_) => "network_error",
            TelescopeError::Parse { .. } => "parse_error",
            TelescopeError::Io(_) => "io_error",
            TelescopeError::Json(_) => "json_error",
            TelescopeError::Yaml(_) => "yaml_error",
            TelescopeError::Toml(_) => "toml_error",
            TelescopeError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for telescope operations
pub type Result<T> = std::result::Result<T, TelescopeError>;
