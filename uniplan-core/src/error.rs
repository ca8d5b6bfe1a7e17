//! Error types for the uniplan ecosystem.

use thiserror::Error;

/// Errors that can occur in uniplan operations.
#[derive(Error, Debug)]
pub enum UniplanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("No stored event with id '{0}'")]
    EventNotFound(String),

    #[error("Event '{0}' is derived from your course schedule or assignments and cannot be modified")]
    SyntheticEvent(String),
}

/// Result type alias for uniplan operations.
pub type UniplanResult<T> = Result<T, UniplanError>;
