use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub global: GlobalConfig,
    /// Pruning targets, processed in the order they appear in the file
    #[serde(default)]
    pub targets: Vec<Target>,
}

/// Global configuration settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlobalConfig {
    /// Path to the native backup tool (wbadmin.exe or compatible)
    pub tool_path: PathBuf,

    /// Number of backup versions to keep on every target
    #[serde(default = "default_keep_versions")]
    pub keep_versions: u32,

    /// Logging configuration
    #[serde(default = "default_log_directory")]
    pub log_directory: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_max_files")]
    pub log_max_files: u32,
}

/// One backup destination to prune
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Target {
    /// Human-readable disk label, e.g. "DISK_01"
    pub label: String,

    /// Rotation-day annotation for matching physical disks; informational only
    #[serde(default)]
    pub day: String,

    /// Volume identifier the backup tool uses to locate the destination,
    /// e.g. "\\?\Volume{557998A3-CF50-4139-80E1-2A8161A823D7}\"
    pub volume: String,
}

// Default value functions

fn default_keep_versions() -> u32 {
    20
}
fn default_log_directory() -> PathBuf {
    PathBuf::from("~/logs")
}
fn default_log_level() -> String {
    "debug".to_string()
}
fn default_log_max_files() -> u32 {
    10
}
