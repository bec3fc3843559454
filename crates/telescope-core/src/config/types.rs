//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Default endpoint for a local Ollama-style server
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:11434";

/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// `[project]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Directory containing block documents, relative to the project root
    #[serde(default = "default_blocks_dir")]
    pub blocks_dir: PathBuf,

    /// Directory receiving run reports, relative to the project root
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
            blocks_dir: default_blocks_dir(),
            reports_dir: default_reports_dir(),
        }
    }
}

/// `[target]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Models to evaluate; an array or a comma-separated string
    #[serde(default, deserialize_with = "deserialize_models")]
    pub models: Vec<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            api_key: None,
        }
    }
}

/// Complete `telescope.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub project: ProjectConfig,
    pub target: TargetConfig,
}

/// Shape of the file before required sections are checked
#[derive(Debug, Deserialize)]
pub(crate) struct RawConfig {
    pub project: Option<ProjectConfig>,
    pub target: Option<TargetConfig>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ModelList {
    List(Vec<String>),
    Csv(String),
}

fn deserialize_models<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = match ModelList::deserialize(deserializer)? {
        ModelList::List(items) => items,
        ModelList::Csv(s) => s.split(',').map(str::to_string).collect(),
    };
    Ok(normalize_models(raw))
}

/// Trim model names and drop empty entries, keeping order
pub fn normalize_models<I, S>(models: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    models
        .into_iter()
        .map(|m| m.as_ref().trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

fn default_name() -> String {
    "unnamed".to_string()
}

fn default_blocks_dir() -> PathBuf {
    PathBuf::from("./benchmarks")
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("./reports")
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
