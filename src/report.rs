//! Per-file outcomes and the run summary

use crate::rewrite::{FileKind, PassKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Rewritten,
    Unchanged,
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FileKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub passes: Vec<PassKind>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub import_added: bool,
}

impl FileOutcome {
    pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            kind: None,
            passes: Vec::new(),
            import_added: false,
        }
    }

    pub fn skipped(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::new(
            path,
            FileStatus::Skipped {
                reason: reason.into(),
            },
        )
    }

    pub fn failed(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self::new(
            path,
            FileStatus::Failed {
                error: error.to_string(),
            },
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

/// Everything that happened during one run
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<FileOutcome>,
}

impl FixReport {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    pub fn rewritten(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Rewritten))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    pub fn summary(&self) -> String {
        let verb = if self.dry_run {
            "would be rewritten"
        } else {
            "rewritten"
        };
        format!(
            "{} file(s) {verb}, {} unchanged, {} skipped, {} failed",
            self.rewritten(),
            self.unchanged(),
            self.skipped(),
            self.failed()
        )
    }
}
