//! Turning loaded blocks into the list of cases a run will execute.

use std::path::Path;

use tracing::debug;

use crate::bail_config;
use crate::block::{EvaluationBlock, TestCase};
use crate::error::Result;

/// Category label used for directory-wide runs
pub const BENCHMARKS_CATEGORY: &str = "benchmarks";

/// A block together with the dataset positions selected for execution
#[derive(Debug, Clone)]
pub struct PlannedBlock {
    pub block: EvaluationBlock,
    /// Indices into `block.dataset`, ascending
    pub case_indices: Vec<usize>,
}

impl PlannedBlock {
    pub fn all(block: EvaluationBlock) -> Self {
        let case_indices = (0..block.dataset.len()).collect();
        Self {
            block,
            case_indices,
        }
    }

    pub fn id(&self) -> &str {
        self.block.id()
    }

    /// Selected cases with their original dataset index
    pub fn cases(&self) -> impl Iterator<Item = (usize, &TestCase)> + '_ {
        self.case_indices
            .iter()
            .map(move |&idx| (idx, &self.block.dataset[idx]))
    }

    pub fn len(&self) -> usize {
        self.case_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.case_indices.is_empty()
    }
}

/// Category for a run: the target's containing directory name, or the
/// fixed benchmarks label for directory-wide runs.
pub fn category_for(target_file: Option<&Path>) -> Option<String> {
    match target_file {
        Some(path) if path.is_file() => path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned()),
        Some(path) => path.file_name().map(|n| n.to_string_lossy().into_owned()),
        None => Some(BENCHMARKS_CATEGORY.to_string()),
    }
}

/// Drop blocks whose `active` flag is false
pub fn filter_active(blocks: Vec<EvaluationBlock>) -> Vec<EvaluationBlock> {
    let before = blocks.len();
    let active: Vec<_> = blocks.into_iter().filter(|b| b.is_active()).collect();
    debug!(before, after = active.len(), "filter_active");
    active
}

/// Narrow the run to the single case whose id equals `target_id`.
///
/// Zero matches and more than one match (across all blocks) are both
/// configuration errors.
pub fn filter_by_id(blocks: Vec<EvaluationBlock>, target_id: &str) -> Result<Vec<PlannedBlock>> {
    let mut planned = Vec::new();
    let mut total_matches = 0;

    for block in blocks {
        let case_indices: Vec<usize> = block
            .dataset
            .iter()
            .enumerate()
            .filter(|(_, case)| case.id.as_deref() == Some(target_id))
            .map(|(idx, _)| idx)
            .collect();

        if !case_indices.is_empty() {
            total_matches += case_indices.len();
            planned.push(PlannedBlock {
                block,
                case_indices,
            });
        }
    }

    if total_matches == 0 {
        bail_config!("no test case found with id: {target_id}");
    }
    if total_matches > 1 {
        bail_config!(
            "multiple test cases found with id: {target_id} ({total_matches} matches). IDs must be unique."
        );
    }

    Ok(planned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockMetadata, BlockPrompts};
    use tempfile::tempdir;

    fn block(id: &str, active: bool, case_ids: &[Option<&str>]) -> EvaluationBlock {
        EvaluationBlock {
            metadata: BlockMetadata {
                id: id.to_string(),
                description: None,
                active,
            },
            prompts: BlockPrompts {
                system: "sys".to_string(),
            },
            grading: None,
            dataset: case_ids
                .iter()
                .enumerate()
                .map(|(i, cid)| TestCase {
                    id: cid.map(str::to_string),
                    input: format!("input {i}"),
                    expected: None,
                    context: None,
                    criteria: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_filter_active() {
        let blocks = vec![
            block("on", true, &[None]),
            block("off", false, &[None]),
        ];
        let active = filter_active(blocks);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), "on");
    }

    #[test]
    fn test_filter_by_id_single_match_keeps_original_index() {
        let blocks = vec![
            block("a", true, &[Some("x"), Some("y")]),
            block("b", true, &[Some("z"), None, Some("target")]),
        ];

        let planned = filter_by_id(blocks, "target").unwrap();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].id(), "b");
        let cases: Vec<_> = planned[0].cases().map(|(idx, c)| (idx, c.input.clone())).collect();
        assert_eq!(cases, vec![(2, "input 2".to_string())]);
    }

    #[test]
    fn test_filter_by_id_no_match() {
        let blocks = vec![block("a", true, &[Some("x")])];
        let err = filter_by_id(blocks, "missing").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("no test case found with id: missing"));
    }

    #[test]
    fn test_filter_by_id_duplicate_across_blocks() {
        let blocks = vec![
            block("a", true, &[Some("dup")]),
            block("b", true, &[Some("dup")]),
        ];
        let err = filter_by_id(blocks, "dup").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("IDs must be unique"));
    }

    #[test]
    fn test_filter_by_id_duplicate_within_block() {
        let blocks = vec![block("a", true, &[Some("dup"), Some("dup")])];
        assert!(filter_by_id(blocks, "dup").is_err());
    }

    #[test]
    fn test_category_for_directory_run() {
        assert_eq!(category_for(None).as_deref(), Some(BENCHMARKS_CATEGORY));
    }

    #[test]
    fn test_category_for_target_file_uses_parent_name() {
        let dir = tempdir().unwrap();
        let suite = dir.path().join("suite");
        std::fs::create_dir(&suite).unwrap();
        let file = suite.join("block.json");
        std::fs::write(&file, "{}").unwrap();

        assert_eq!(category_for(Some(&file)).as_deref(), Some("suite"));
        assert_eq!(category_for(Some(&suite)).as_deref(), Some("suite"));
    }
}
