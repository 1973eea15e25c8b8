//! Error types for the kanban engine
//!
//! Board mutations themselves are total. These errors cover strict-mode lookups,
//! persistence I/O, stored JSON and configuration.

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Column not found (strict mode only)
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task not found (strict mode only)
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl BoardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ColumnNotFound { .. } | Self::TaskNotFound { .. })
    }
}

impl From<figment::Error> for BoardError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
