// Zip command implementation
// Scans a directory, validates bootanimation folders and archives them

use clap::Args;
use std::path::{Component, Path, PathBuf};

use crate::models::report::{FolderStatus, ZipReport};
use crate::services::processor::BootAnimationProcessor;
use crate::services::store_archiver::ArchiveConfig;
use crate::utils::error::{BootzipError, Result};

const SEPARATOR_WIDTH: usize = 60;

#[derive(Debug, Args)]
pub struct ZipCommand {
    /// Directory containing bootanimation folders
    pub directory: PathBuf,

    /// Store a fixed 1980-01-01 timestamp on every entry
    #[arg(long, env = "BOOTZIP_REPRODUCIBLE")]
    pub reproducible: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ZipCommand {
    /// Execute the zip command and return the run report
    pub fn run(&self) -> Result<ZipReport> {
        let directory = resolve_directory(&self.directory)?;
        let processor = BootAnimationProcessor::with_config(
            ArchiveConfig::new().with_reproducible(self.reproducible),
        );

        let report = if self.json {
            let report = processor.process_directory(&directory)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            report
        } else {
            run_with_progress(&processor, &directory)?
        };

        Ok(report)
    }
}

/// Make the path absolute and resolve it, then check it is an existing directory
pub fn resolve_directory(path: &Path) -> Result<PathBuf> {
    let resolved = resolve_path(path)?;

    if !resolved.exists() {
        return Err(BootzipError::DirectoryNotFound(resolved));
    }
    if !resolved.is_dir() {
        return Err(BootzipError::NotADirectory(resolved));
    }

    Ok(resolved)
}

/// Resolve symlinks along the existing prefix and apply `.` and `..`
/// lexically past it. An empty path is the current directory.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.as_os_str().is_empty() {
        std::env::current_dir()?
    } else {
        std::path::absolute(path)?
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => {
                resolved.push(other.as_os_str());
                if let Ok(real) = resolved.canonicalize() {
                    resolved = real;
                }
            }
        }
    }

    Ok(resolved)
}

fn run_with_progress(processor: &BootAnimationProcessor, directory: &Path) -> Result<ZipReport> {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    println!("Searching for bootanimation folders in: {}", directory.display());
    println!("{separator}");

    let folders = processor.discover(directory)?;
    let mut report = ZipReport::new(directory);

    if folders.is_empty() {
        println!("No bootanimation folders found.");
    } else {
        println!("Found {} bootanimation folder(s):\n", folders.len());

        for folder in &folders {
            println!("Processing: {}", folder.name);
            let outcome = processor.process_folder(folder);

            match &outcome.status {
                FolderStatus::Created { .. } => {
                    println!("  ✓ Created: {}", folder.archive_name());
                }
                FolderStatus::Skipped { missing } => {
                    let labels: Vec<&str> = missing.iter().map(|a| a.label()).collect();
                    println!("  ✗ Skipped - Missing required: {}", labels.join(", "));
                }
                FolderStatus::Failed { error } => {
                    println!("  Error zipping {}: {}", folder.name, error);
                }
            }

            report.record(outcome);
        }
    }

    println!("{separator}");
    println!(
        "Done! Successful: {}, Skipped/Failed: {}",
        report.successful, report.failed
    );

    Ok(report)
}
