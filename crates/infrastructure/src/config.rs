//! Suite configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use restq_domain::{DomainError, TestConfig};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid YAML for a configuration.
    #[error("invalid config format: {0}")]
    Format(#[from] serde_yaml::Error),

    /// The configuration failed validation.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Parses and validates a YAML (or JSON) configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Format`] for malformed content and
/// [`ConfigError::Invalid`] when validation fails.
pub fn parse_config(content: &str) -> Result<TestConfig, ConfigError> {
    let config: TestConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Reads a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read, or any error
/// from [`parse_config`].
pub fn load_config(path: impl AsRef<Path>) -> Result<TestConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;
    info!(path = %path.display(), suite = %config.name, "loaded configuration");
    Ok(config)
}
