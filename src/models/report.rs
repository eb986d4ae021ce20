use serde::Serialize;
use std::path::PathBuf;

use crate::models::bootanimation::RequiredArtifact;

/// Outcome of processing one bootanimation folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FolderStatus {
    /// Archive written
    Created { archive: PathBuf, entries: usize },
    /// Folder failed validation and was not archived
    Skipped { missing: Vec<RequiredArtifact> },
    /// Archive write failed
    Failed { error: String },
}

impl FolderStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, FolderStatus::Created { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderOutcome {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FolderStatus,
}

/// Result of a full run over one directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ZipReport {
    pub directory: PathBuf,
    pub folders: Vec<FolderOutcome>,
    pub successful: usize,
    pub failed: usize,
}

impl ZipReport {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Record a folder outcome and update the counters
    pub fn record(&mut self, outcome: FolderOutcome) {
        if outcome.status.is_success() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
        self.folders.push(outcome);
    }

    /// Skipped and failed folders both count against the run
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
