// bootzip - bootanimation folder archiver
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::folder_scanner::FolderScanner;
pub use services::processor::BootAnimationProcessor;
pub use services::store_archiver::{ArchiveConfig, StoreArchiver};
pub use utils::error::{BootzipError, Result};
