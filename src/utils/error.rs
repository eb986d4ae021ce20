// Common error types for bootzip

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootzipError {
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BootzipError>;

/// Error presented to the user on stderr, with the process exit code to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_bootzip_error(err: &BootzipError) -> Self {
        Self {
            message: format!("Error: {err}"),
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
