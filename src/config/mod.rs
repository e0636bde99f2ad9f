//! Configuration module for backup-pruner
//!
//! This module handles loading and validating configuration from TOML files.
//!
//! ## Example Usage
//!
//! ```no_run
//! use backup_pruner::config;
//!
//! let config = config::load_config("pruner-config.toml")?;
//!
//! for target in &config.targets {
//!     println!("Target: {} -> {}", target.label, target.volume);
//! }
//! # Ok::<(), config::ConfigError>(())
//! ```

mod loader;
mod types;

pub use loader::{load_config, ConfigError, Result};
pub use types::*;

/// Expand tilde (~) in path
pub fn expand_tilde(path: &std::path::Path) -> std::path::PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
