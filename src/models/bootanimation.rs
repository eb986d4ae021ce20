use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the directory holding the first animation part
pub const PART0_DIR: &str = "part0";
/// Name of the animation descriptor file
pub const DESC_FILE: &str = "desc.txt";

/// A candidate bootanimation folder found in the scanned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootAnimationFolder {
    /// Folder name as found on disk (case preserved)
    pub name: String,
    /// Full path to the folder
    pub path: PathBuf,
    /// Digits following `bootanimation`, `None` for the bare folder
    pub suffix: Option<String>,
}

/// Artifact a valid bootanimation folder must contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequiredArtifact {
    #[serde(rename = "part0/")]
    Part0Dir,
    #[serde(rename = "desc.txt")]
    DescFile,
}

impl RequiredArtifact {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredArtifact::Part0Dir => "part0/",
            RequiredArtifact::DescFile => "desc.txt",
        }
    }

    /// Returns true if the artifact is present with the right type inside `folder`
    pub fn is_present_in(&self, folder: &Path) -> bool {
        match self {
            RequiredArtifact::Part0Dir => folder.join(PART0_DIR).is_dir(),
            RequiredArtifact::DescFile => folder.join(DESC_FILE).is_file(),
        }
    }

    pub fn all() -> &'static [RequiredArtifact] {
        &[RequiredArtifact::Part0Dir, RequiredArtifact::DescFile]
    }
}

impl fmt::Display for RequiredArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl BootAnimationFolder {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, suffix: Option<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            suffix: suffix.filter(|digits| !digits.is_empty()),
        }
    }

    /// Path of the archive written for this folder, next to it with a `.zip` extension
    pub fn archive_path(&self) -> PathBuf {
        self.path.with_extension("zip")
    }

    /// File name of the archive, as shown in reports
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.name)
    }

    /// Check the folder against the required artifacts.
    ///
    /// Returns the artifacts that are missing (or present with the wrong type),
    /// in declaration order.
    pub fn validate(&self) -> Result<(), Vec<RequiredArtifact>> {
        let missing: Vec<RequiredArtifact> = RequiredArtifact::all()
            .iter()
            .copied()
            .filter(|artifact| !artifact.is_present_in(&self.path))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Canonical processing order: the bare folder first, then numbered
    /// folders by the numeric value of their suffix. Equal values fall back
    /// to the folder name.
    pub fn processing_order(&self, other: &Self) -> Ordering {
        match (&self.suffix, &other.suffix) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => compare_numeric(a, b),
        }
        .then_with(|| self.name.cmp(&other.name))
    }
}

/// Compare two ASCII digit strings by numeric value without parsing,
/// so suffixes of any length are ordered correctly.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
