use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, Timelike};
use log::{debug, trace, warn};
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime as ZipDateTime, ZipWriter};

/// How entry modification times are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampPolicy {
    /// Use each file's modification time
    #[default]
    Preserve,
    /// Use 1980-01-01 00:00:00 for every entry
    Fixed,
}

/// Configuration for archive writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Timestamp recorded for each entry
    pub timestamps: TimestampPolicy,
    /// Record Unix permission bits of the source files
    pub preserve_permissions: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            timestamps: TimestampPolicy::Preserve,
            preserve_permissions: true,
        }
    }
}

impl ArchiveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte-identical archives for identical folder contents
    pub fn with_reproducible(mut self, reproducible: bool) -> Self {
        self.timestamps = if reproducible {
            TimestampPolicy::Fixed
        } else {
            TimestampPolicy::Preserve
        };
        self
    }

    pub fn with_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }
}

/// A file scheduled for inclusion in an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Name inside the archive, `/`-separated and relative to the folder root
    pub name: String,
    /// File on disk the contents are read from
    pub source: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
    pub mode: Option<u32>,
}

/// Totals for one written archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub entries: usize,
    pub bytes: u64,
}

/// Writes folders into uncompressed zip archives
#[derive(Debug, Clone, Default)]
pub struct StoreArchiver {
    config: ArchiveConfig,
}

impl StoreArchiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ArchiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Archive every file below `folder` into `output`.
    ///
    /// `output` is created or truncated. If writing fails the partial archive
    /// is removed before the error is returned.
    pub fn archive_folder(&self, folder: &Path, output: &Path) -> Result<ArchiveSummary> {
        let entries = self.collect_entries(folder)?;
        debug!(
            "archiving {} files from {} into {}",
            entries.len(),
            folder.display(),
            output.display()
        );

        let file = File::create(output)
            .with_context(|| format!("failed to create zip: {}", output.display()))?;

        match self.write_archive(file, &entries) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                if let Err(remove_err) = fs::remove_file(output) {
                    warn!(
                        "failed to remove partial archive {}: {}",
                        output.display(),
                        remove_err
                    );
                }
                Err(err)
            }
        }
    }

    /// List the files below `folder` in archive order.
    ///
    /// At each directory level the files come first, sorted by name, followed
    /// by each subdirectory in sorted order. Symlinked files are included,
    /// symlinked directories are not followed.
    pub fn collect_entries(&self, folder: &Path) -> Result<Vec<ArchiveEntry>> {
        let walker = WalkDir::new(folder).min_depth(1).sort_by(files_before_dirs);

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.with_context(|| format!("failed to walk {}", folder.display()))?;
            if !is_archivable_file(&entry) {
                continue;
            }

            let relative = entry.path().strip_prefix(folder).with_context(|| {
                format!(
                    "failed to build relative path from {} to {}",
                    folder.display(),
                    entry.path().display()
                )
            })?;
            let name = archive_name(relative)?;

            // Follows symlinks, so sizes and times describe the stored contents
            let metadata = fs::metadata(entry.path())
                .with_context(|| format!("failed to stat {}", entry.path().display()))?;

            entries.push(ArchiveEntry {
                name,
                source: entry.path().to_path_buf(),
                size: metadata.len(),
                modified: metadata.modified().ok(),
                mode: self.config.preserve_permissions.then(|| file_mode(&metadata)).flatten(),
            });
        }

        Ok(entries)
    }

    /// Write `entries` as stored (uncompressed) members of a new zip archive
    pub fn write_archive<W: Write + Seek>(
        &self,
        writer: W,
        entries: &[ArchiveEntry],
    ) -> Result<ArchiveSummary> {
        let mut zip = ZipWriter::new(writer);
        let mut summary = ArchiveSummary::default();

        for entry in entries {
            let mut source = File::open(&entry.source).with_context(|| {
                format!("failed to open file for zip: {}", entry.source.display())
            })?;

            zip.start_file(entry.name.as_str(), self.entry_options(entry))
                .with_context(|| format!("failed to add file to zip: {}", entry.name))?;
            let written = io::copy(&mut source, &mut zip)
                .with_context(|| format!("failed to write file to zip: {}", entry.name))?;

            trace!("stored {} ({} bytes)", entry.name, written);
            summary.entries += 1;
            summary.bytes += written;
        }

        zip.finish().context("failed to finalize zip archive")?;
        Ok(summary)
    }

    fn entry_options(&self, entry: &ArchiveEntry) -> SimpleFileOptions {
        let modified = match self.config.timestamps {
            TimestampPolicy::Fixed => ZipDateTime::default(),
            TimestampPolicy::Preserve => entry
                .modified
                .map_or_else(ZipDateTime::default, to_zip_datetime),
        };

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .last_modified_time(modified)
            .large_file(entry.size >= u64::from(u32::MAX));

        match entry.mode {
            Some(mode) => options.unix_permissions(mode),
            None => options,
        }
    }
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_archivable_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        entry.path().is_file()
    } else {
        file_type.is_file()
    }
}

/// Join path components with `/` regardless of platform
fn archive_name(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component
            .as_os_str()
            .to_str()
            .with_context(|| format!("path is not valid UTF-8: {}", relative.display()))?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

/// Convert to a local zip timestamp. Zip covers 1980..=2107; anything
/// outside falls back to 1980-01-01.
#[allow(clippy::cast_possible_truncation)]
fn to_zip_datetime(modified: SystemTime) -> ZipDateTime {
    let local: DateTime<Local> = modified.into();
    let Ok(year) = u16::try_from(local.year()) else {
        return ZipDateTime::default();
    };

    ZipDateTime::from_date_and_time(
        year,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .unwrap_or_default()
}

#[cfg(unix)]
fn file_mode(metadata: &fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn file_mode(_metadata: &fs::Metadata) -> Option<u32> {
    None
}
