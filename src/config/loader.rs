use super::types::*;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate target label '{0}'")]
    DuplicateLabel(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Load and validate configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate the configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.global.tool_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "tool_path must not be empty".to_string(),
        ));
    }

    // An empty target table is valid: the pass is a no-op that exits 0.
    let mut seen = HashSet::new();
    for target in &config.targets {
        validate_target(target)?;
        if !seen.insert(target.label.as_str()) {
            return Err(ConfigError::DuplicateLabel(target.label.clone()));
        }
    }

    Ok(())
}

fn validate_target(target: &Target) -> Result<()> {
    if target.label.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Target label must not be empty".to_string(),
        ));
    }

    if target.volume.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "Target '{}': volume identifier must not be empty",
            target.label
        )));
    }

    Ok(())
}
