//! Error types for ordering operations.

use thiserror::Error;

/// Result alias used by every fallible ordering operation.
pub type OrderResult<T> = Result<T, OrderError>;

/// Errors raised while enforcing precedence rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The stored rules plus the rule being enforced cannot all hold.
    ///
    /// Raised when the cascade would need two items to occupy the same
    /// slot. `moving` is the key of the item that had to move past
    /// `blocking`, whose own rules forbid it.
    #[error("moving {moving} after {blocking} conflicts with existing rules")]
    ConflictingRules { moving: String, blocking: String },

    /// An insertion index past the end of the sequence.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl OrderError {
    /// Whether this error signals an unsatisfiable rule set.
    pub fn is_conflict(&self) -> bool {
        matches!(self, OrderError::ConflictingRules { .. })
    }
}
