use crate::manifest::Category;
use serde::{Deserialize, Serialize};

/// Outcome of a single manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file was moved into the docs folder
    Moved,
    /// Nothing to move: the file is no longer at the project root
    NotFound,
    /// The move was attempted and failed
    Error(String),
}

/// A per-file move failure, kept for the summary block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveFailure {
    pub file_name: String,
    pub category: Category,
    pub message: String,
}

/// Aggregate result of one relocation run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelocationSummary {
    pub moved_count: usize,
    pub not_found_count: usize,
    pub errors: Vec<MoveFailure>,
    /// Tracked-extension files still at the project root after the run.
    /// Informational only; never affects the run classification.
    pub remaining_files: Vec<String>,
}

/// Overall run classification, surfaced as the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every manifest file moved; none missing, no errors
    Success,
    /// No errors, but some manifest files were not found
    Partial,
    /// At least one move failed
    Errors,
}

impl RelocationSummary {
    /// Classify the run. Errors win over missing files.
    pub fn status(&self) -> RunStatus {
        if !self.errors.is_empty() {
            RunStatus::Errors
        } else if self.not_found_count > 0 {
            RunStatus::Partial
        } else {
            RunStatus::Success
        }
    }
}

impl RunStatus {
    /// Process exit code reported to the operator
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Errors => 1,
            RunStatus::Partial => 2,
        }
    }
}
