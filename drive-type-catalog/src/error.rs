// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use thiserror::Error;

/// Error types for catalog configuration
///
/// These only surface while configuration is loaded and name templates are
/// parsed; catalog operations themselves report `StorageError`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {setting} template {template:?}: {reason}")]
    Template {
        setting: &'static str,
        template: String,
        reason: String,
    },

    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
