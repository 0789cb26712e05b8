//! Error types for binding expressions.
//!
//! The algebra itself never fails: absent or unrepresentable input becomes
//! [`Expression::Unresolvable`](crate::Expression::Unresolvable). These errors
//! cover the few fallible edges around it.

use thiserror::Error;

/// Errors that can occur around binding expression construction.
#[derive(Error, Debug)]
pub enum BindingError {
    /// Operator token that is not part of the binding syntax.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// Expression tree could not be serialized for outlining.
    #[error("cannot serialize expression: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for binding expression operations.
pub type BindingResult<T> = std::result::Result<T, BindingError>;
