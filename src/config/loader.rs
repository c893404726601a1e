//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ConsumerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "CONSUMER_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ConsumerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ConsumerConfig, ConfigError> {
    let config: ConsumerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load from the file named by `CONSUMER_CONFIG`, or fall back to defaults.
pub fn load_from_env() -> Result<ConsumerConfig, ConfigError> {
    match std::env::var_os(CONFIG_PATH_VAR) {
        Some(path) if !path.is_empty() => load_config(Path::new(&path)),
        _ => Ok(ConsumerConfig::default()),
    }
}
