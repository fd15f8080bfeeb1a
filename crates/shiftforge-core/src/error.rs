//! Error types for ShiftForge

use thiserror::Error;

/// Main error type for ShiftForge operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShiftForgeError {
    /// Invalid schedule configuration, detected before any variable is created
    #[error("Configuration error: {0}")]
    Config(String),

    /// Search exhausted every choice point without finding a roster
    #[error("No feasible roster exists for this roster and configuration")]
    Infeasible,

    /// Time or node budget ran out before a roster was found
    #[error("Search budget exhausted before a roster was found")]
    BudgetExhausted,

    /// Solve was cancelled through the external flag
    #[error("Solve was cancelled")]
    Cancelled,

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShiftForgeError {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ShiftForgeError::Config(message.into())
    }

    /// Shorthand for an internal consistency violation.
    pub fn internal(message: impl Into<String>) -> Self {
        ShiftForgeError::Internal(message.into())
    }
}

/// Result type alias for ShiftForge operations
pub type Result<T> = std::result::Result<T, ShiftForgeError>;
