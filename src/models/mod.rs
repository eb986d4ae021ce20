// Data models for bootzip

pub mod bootanimation;
pub mod report;

// Re-export main types for convenience
pub use bootanimation::{BootAnimationFolder, RequiredArtifact};
pub use report::{FolderOutcome, FolderStatus, ZipReport};
