//! Evaluation blocks and their loading.
//!
//! An evaluation block is a named group of test cases that share a system
//! prompt. Blocks live on disk as JSON or YAML documents:
//!
//! ```json
//! {
//!   "metadata": { "id": "reasoning", "active": true },
//!   "prompts": { "system": "Think step by step." },
//!   "dataset": [
//!     { "id": "100001", "input": "Is an elephant bigger than a mouse?", "expected": "Yes" }
//!   ]
//! }
//! ```

pub mod loader;

pub use loader::{load_blocks, parse_block_file, LoadedBlocks, SkippedDocument};

use serde::{Deserialize, Serialize};

/// Grading criteria hints attached to a test case
pub type GradingCriteria = Vec<String>;

/// Metadata identifying an evaluation block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetadata {
    /// Unique identifier for the block
    pub id: String,

    /// Optional description of the block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the block takes part in directory-wide runs
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Prompts shared by every case in a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPrompts {
    pub system: String,
}

/// Grading settings applied to the entire block.
///
/// Carried through to reports for reproducibility; never evaluated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockGrading {
    /// Prompt template for a later grading pass
    pub template: String,

    /// Model override for grading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A single prompt/expectation pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub input: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    /// Appended to the system prompt as a `Context:` section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<GradingCriteria>,
}

/// Complete evaluation block: metadata, prompts, optional grading, and cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationBlock {
    pub metadata: BlockMetadata,
    pub prompts: BlockPrompts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading: Option<BlockGrading>,
    pub dataset: Vec<TestCase>,
}

impl EvaluationBlock {
    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn is_active(&self) -> bool {
        self.metadata.active
    }

    /// Grading template, when the block defines grading
    pub fn grading_template(&self) -> Option<&str> {
        self.grading.as_ref().map(|g| g.template.as_str())
    }

    /// System prompt for a case, with the case's context appended when present.
    ///
    /// An empty context counts as absent.
    pub fn system_prompt_for(&self, case: &TestCase) -> String {
        match &case.context {
            Some(context) if !context.is_empty() => {
                format!("{}\n\nContext:\n{}", self.prompts.system, context)
            }
            _ => self.prompts.system.clone(),
        }
    }
}
