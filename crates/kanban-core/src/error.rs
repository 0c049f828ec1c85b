//! Centralized error types for the Kanban core.

use thiserror::Error;

/// Main error type for board operations.
///
/// Stale column or card references never surface here from the mutating
/// operations; those degrade to [`crate::board::Outcome::Unchanged`]. The
/// not-found variants are produced only by the strict lookups.
#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for board operations.
pub type KanbanResult<T> = Result<T, KanbanError>;

impl KanbanError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the caller-side validation boundary.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}
