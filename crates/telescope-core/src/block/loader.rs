//! Loading evaluation blocks from a file or a directory.
//!
//! A bad document never aborts a load: it is skipped, logged at warn level,
//! and reported back as a [`SkippedDocument`] so the caller can surface it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::EvaluationBlock;
use crate::error::{Result, TelescopeError};

/// File extensions picked up when loading a directory
const BLOCK_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// A document that could not be turned into an evaluation block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of loading blocks from disk
#[derive(Debug, Clone, Default)]
pub struct LoadedBlocks {
    pub blocks: Vec<EvaluationBlock>,
    pub skipped: Vec<SkippedDocument>,
}

/// Load evaluation blocks from a single document or a directory of documents.
///
/// Directories are read one level deep, in lexically sorted file-name order.
/// A path that is neither a file nor a directory yields nothing.
pub fn load_blocks(path: &Path) -> LoadedBlocks {
    let mut loaded = LoadedBlocks::default();

    if path.is_file() {
        load_into(path, &mut loaded);
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let file = entry.path();
            if file.is_file() && has_block_extension(file) {
                load_into(file, &mut loaded);
            }
        }
    } else {
        warn!(path = %path.display(), "block path does not exist");
    }

    debug!(
        path = %path.display(),
        blocks = loaded.blocks.len(),
        skipped = loaded.skipped.len(),
        "load_blocks"
    );

    loaded
}

fn load_into(path: &Path, loaded: &mut LoadedBlocks) {
    match parse_block_file(path) {
        Ok(block) => loaded.blocks.push(block),
        Err(e) => {
            let reason = match &e {
                TelescopeError::Parse { reason, .. } => reason.clone(),
                other => other.to_string(),
            };
            warn!(path = %path.display(), reason = %reason, "skipping block document");
            loaded.skipped.push(SkippedDocument {
                path: path.to_path_buf(),
                reason,
            });
        }
    }
}

/// Parse one document into an evaluation block.
///
/// `.yaml`/`.yml` files are read as YAML, everything else as JSON.
pub fn parse_block_file(path: &Path) -> Result<EvaluationBlock> {
    let content = fs::read_to_string(path)
        .map_err(|e| TelescopeError::io_operation("read", path.display(), e))?;

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| TelescopeError::parse(path, e))
    } else {
        serde_json::from_str(&content).map_err(|e| TelescopeError::parse(path, e))
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn has_block_extension(path: &Path) -> bool {
    extension(path).is_some_and(|e| BLOCK_EXTENSIONS.contains(&e.as_str()))
}

fn is_yaml(path: &Path) -> bool {
    extension(path).is_some_and(|e| e == "yaml" || e == "yml")
}
