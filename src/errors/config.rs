//! Error types for explorer configuration.

use std::path::PathBuf;

/// Errors that can occur while loading or validating an
/// [`ExplorerConfig`](crate::ExplorerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path}")]
    Io {
        /// Path of the file that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for the expected shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but failed validation.
    #[error("Invalid configuration: {reason}")]
    Invalid {
        /// Why the configuration was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Create an `Invalid` error with a reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}
