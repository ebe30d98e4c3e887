//! Common error types for archaudit.

use thiserror::Error;

/// Common error type for archaudit operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bundle: {0}")]
    InvalidBundle(String),

    #[error("Tool invocation failed: {tool} - {reason}")]
    ToolInvocation { tool: String, reason: String },

    #[error("Tool timed out: {tool}")]
    ToolTimeout { tool: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Error::Other(e.to_string())
    }
}
