// Shared utilities: error types and logger setup

pub mod error;
pub mod logging;
