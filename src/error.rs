//! Error types for Surf

use thiserror::Error;

/// Result type alias for Surf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Diagnostic code raised when an application has no deployment path
pub const MISSING_DEPLOYMENT_PATH: u64 = 1312220645;

/// Diagnostic code raised when an application references an undefined node
pub const UNKNOWN_NODE: u64 = 1334652420;

/// Diagnostic code raised when a deployment defines the same node twice
pub const DUPLICATE_NODE: u64 = 1334652421;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Deployment definition not found: {0}")]
    NotFound(String),

    #[error("Failed to parse deployment definition: {0}")]
    ParseError(String),

    #[error("{message} ({code})")]
    InvalidConfiguration { message: String, code: u64 },

    #[error("Option \"{key}\" is not set for application {application}")]
    MissingOption { application: String, key: String },
}

impl ConfigError {
    /// Build an invalid configuration error from a message and diagnostic code
    pub fn invalid(message: impl Into<String>, code: u64) -> Self {
        ConfigError::InvalidConfiguration {
            message: message.into(),
            code,
        }
    }

    /// Diagnostic code, if this error carries one
    pub fn code(&self) -> Option<u64> {
        match self {
            ConfigError::InvalidConfiguration { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
