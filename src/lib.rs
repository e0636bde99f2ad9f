//! Backup Pruner Library
//!
//! Enforces a keep-last-N retention policy on wbadmin-style backup
//! destinations by invoking the native backup tool once per configured
//! target and classifying the exit code.

pub mod config;
pub mod managers;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, Config, GlobalConfig, Target};
pub use managers::logging::{init_console_logging, init_logging, LogGuard, LoggingConfig};
pub use managers::pruning::{PassSummary, PruningManager};
