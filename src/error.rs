//! Error types for task operations
//!
//! Operations fail in two recoverable ways: bad user input (`Validation`)
//! and references to unknown task ids (`NotFound`). Neither leaves any
//! partial change behind. Failures to read or write the store are carried
//! through `Storage`.

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("task description cannot be empty")]
    EmptyDescription,
    #[error("invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2025-03-15')")]
    InvalidDate(String),
    #[error("invalid priority '{0}'. Valid priorities: high, medium, low")]
    InvalidPriority(String),
}

/// Error type for task store operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("task not found: {0}")]
    NotFound(u32),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl TaskError {
    /// True for errors caused by user input rather than I/O
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TaskError::Storage(_))
    }
}
