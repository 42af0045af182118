//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, history boundaries). Every variant is recoverable and is
/// reported to the immediate caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An element with the same identity already exists in the collection.
    #[error("this {kind} already exists")]
    DuplicateEntity { kind: &'static str },

    /// The targeted element does not exist in the collection.
    #[error("this {kind} does not exist")]
    EntityNotFound { kind: &'static str },

    /// The history cursor is already at the oldest state.
    #[error("no more commands to undo")]
    NoUndoableState,

    /// The history cursor is already at the newest state.
    #[error("no more commands to redo")]
    NoRedoableState,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn duplicate(kind: &'static str) -> Self {
        Self::DuplicateEntity { kind }
    }

    pub fn not_found(kind: &'static str) -> Self {
        Self::EntityNotFound { kind }
    }
}
