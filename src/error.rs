//! Error types for the audit system

use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Main error type for audit operations.
///
/// Only [`AuditError::InvalidInput`] and [`AuditError::FetchFailure`] can abort
/// an audit run. A check that does not pass is a verdict, never an error.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    #[error("Unable to fetch {url}: {source}")]
    FetchFailure {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AuditError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a fetch failure for the given URL
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::FetchFailure {
            url: url.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Whether this error ends the run before any check is evaluated
    pub fn is_fatal_fetch(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }
}
