use log::{debug, info};
use std::path::Path;

use crate::models::bootanimation::BootAnimationFolder;
use crate::models::report::{FolderOutcome, FolderStatus, ZipReport};
use crate::services::folder_scanner::FolderScanner;
use crate::services::store_archiver::{ArchiveConfig, StoreArchiver};
use crate::utils::error::Result;

/// Validates and archives bootanimation folders
#[derive(Debug, Clone, Default)]
pub struct BootAnimationProcessor {
    scanner: FolderScanner,
    archiver: StoreArchiver,
}

impl BootAnimationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ArchiveConfig) -> Self {
        Self {
            scanner: FolderScanner::new(),
            archiver: StoreArchiver::with_config(config),
        }
    }

    pub fn discover(&self, directory: &Path) -> Result<Vec<BootAnimationFolder>> {
        let folders = self.scanner.scan(directory)?;
        info!(
            "found {} bootanimation folder(s) in {}",
            folders.len(),
            directory.display()
        );
        Ok(folders)
    }

    /// Validate one folder and write its archive if it passes
    pub fn process_folder(&self, folder: &BootAnimationFolder) -> FolderOutcome {
        let status = match folder.validate() {
            Err(missing) => {
                debug!(
                    "skipping {}: missing {}",
                    folder.name,
                    missing.iter().map(|a| a.label()).collect::<Vec<_>>().join(", ")
                );
                FolderStatus::Skipped { missing }
            }
            Ok(()) => {
                let archive = folder.archive_path();
                match self.archiver.archive_folder(&folder.path, &archive) {
                    Ok(summary) => {
                        info!(
                            "created {} ({} entries, {} bytes)",
                            archive.display(),
                            summary.entries,
                            summary.bytes
                        );
                        FolderStatus::Created {
                            archive,
                            entries: summary.entries,
                        }
                    }
                    Err(err) => {
                        info!("archiving {} failed: {:#}", folder.name, err);
                        FolderStatus::Failed {
                            error: format!("{err:#}"),
                        }
                    }
                }
            }
        };

        FolderOutcome {
            name: folder.name.clone(),
            path: folder.path.clone(),
            status,
        }
    }

    /// Discover and process every folder in `directory`, without printing
    pub fn process_directory(&self, directory: &Path) -> Result<ZipReport> {
        let mut report = ZipReport::new(directory);
        for folder in self.discover(directory)? {
            report.record(self.process_folder(&folder));
        }
        Ok(report)
    }
}
