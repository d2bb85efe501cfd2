use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Zero-based index the inserted line lands on.
pub const INSERT_POSITION: usize = 1;

pub const DEFAULT_SUFFIX: &str = ".py";

/// The three inputs of a run. Built by the caller, never discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertConfig {
    pub base_directory: PathBuf,
    pub suffix: String,
    pub inserted_line: String,
}

impl InsertConfig {
    pub fn new(
        base_directory: impl Into<PathBuf>,
        suffix: impl Into<String>,
        inserted_line: impl Into<String>,
    ) -> Self {
        Self {
            base_directory: base_directory.into(),
            suffix: suffix.into(),
            inserted_line: inserted_line.into(),
        }
    }
}

/// What a run does after the first file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure and move on to the next candidate.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub original_lines: usize,
    pub written: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub directory: PathBuf,
    pub suffix: String,
    pub candidates: usize,
    pub modified: Vec<FileOutcome>,
    pub failed: Vec<FileFailure>,
    pub dry_run: bool,
    /// Set when the run stopped before every candidate was handled.
    pub aborted: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
