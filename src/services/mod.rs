pub mod folder_scanner;
pub mod processor;
pub mod store_archiver;
