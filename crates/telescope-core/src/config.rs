//! Project configuration for telescope
//!
//! Configuration lives in `telescope.toml` at the project root and is loaded
//! fresh for every command. Environment settings are read separately into
//! [`Settings`].

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::bail_config;
use crate::error::{Result, TelescopeError};

pub use types::{
    normalize_models, Config, ProjectConfig, TargetConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "telescope.toml";

/// Environment variable toggling the in-memory chat client
pub const ENV_USE_MOCK_LLM: &str = "TLS_USE_MOCK_LLM";

/// Environment variable overriding `target.api_key`
pub const ENV_API_KEY: &str = "TLS_API_KEY";

impl Config {
    /// Load `telescope.toml` from `project_root`
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.is_file() {
            bail_config!("{CONFIG_FILE} not found. Run `tls init` first.");
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| TelescopeError::io_operation("read", path.display(), e))?;
        let config = Self::parse(&content)?;

        debug!(
            path = %path.display(),
            project = %config.project.name,
            models = config.target.models.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let raw: types::RawConfig = toml::from_str(content)
            .map_err(|e| TelescopeError::config(format!("invalid {CONFIG_FILE}: {e}")))?;

        let Some(project) = raw.project else {
            bail_config!("Missing [project] section in {CONFIG_FILE}");
        };
        let Some(target) = raw.target else {
            bail_config!("Missing [target] section in {CONFIG_FILE}");
        };
        if target.models.is_empty() {
            bail_config!("No models specified in [target] section");
        }

        Ok(Self { project, target })
    }

    /// Blocks directory resolved against `project_root`
    pub fn blocks_dir(&self, project_root: &Path) -> PathBuf {
        resolve_path(project_root, &self.project.blocks_dir)
    }

    /// Reports directory resolved against `project_root`
    pub fn reports_dir(&self, project_root: &Path) -> PathBuf {
        resolve_path(project_root, &self.project.reports_dir)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.target.timeout)
    }
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Process-level settings taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Use the in-memory chat client instead of HTTP
    pub use_mock_llm: bool,
    /// API key overriding the configured one
    pub api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            use_mock_llm: lookup(ENV_USE_MOCK_LLM)
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            api_key: lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()),
        }
    }

    /// API key to send: the environment override, then the configured key
    pub fn effective_api_key<'a>(&'a self, config: Option<&'a Config>) -> Option<&'a str> {
        self.api_key
            .as_deref()
            .or_else(|| config.and_then(|c| c.target.api_key.as_deref()))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
