use log::{debug, trace};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::models::bootanimation::BootAnimationFolder;
use crate::utils::error::Result;

/// `bootanimation` followed by optional ASCII digits, any case
static FOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^bootanimation([0-9]*)$").expect("folder pattern is a valid regex")
});

/// Finds bootanimation folders among the immediate subdirectories of a directory
#[derive(Debug, Default, Clone, Copy)]
pub struct FolderScanner;

impl FolderScanner {
    pub fn new() -> Self {
        Self
    }

    /// Match a folder name, returning the numeric suffix (empty for the bare name)
    pub fn match_name(name: &str) -> Option<&str> {
        FOLDER_PATTERN
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map(|digits| digits.as_str())
    }

    /// List matching folders in canonical processing order
    pub fn scan(&self, directory: &Path) -> Result<Vec<BootAnimationFolder>> {
        let mut folders = Vec::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                trace!("ignoring non UTF-8 entry {}", path.display());
                continue;
            };

            match Self::match_name(&name) {
                Some(digits) => {
                    debug!("found candidate folder {}", path.display());
                    let suffix = Some(digits.to_string());
                    folders.push(BootAnimationFolder::new(name, path, suffix));
                }
                None => trace!("ignoring directory {name}"),
            }
        }

        folders.sort_by(BootAnimationFolder::processing_order);
        Ok(folders)
    }
}
