// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
///
/// Set operations, predicates, and boolean connectives are total and never
/// fail; errors arise only from malformed sum-type construction and from
/// state-machine misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A pattern matcher lacks a handler for a tag present in the union
    #[error("Missing handler for tag: {tag}")]
    MissingHandler {
        /// Tag of the unhandled variant
        tag: String,
    },

    /// A pattern matcher registered two handlers for the same tag
    #[error("Duplicate handler for tag: {tag}")]
    DuplicateHandler {
        /// Tag that was handled twice
        tag: String,
    },

    /// A tag outside the sum type's alphabet
    #[error("Unknown tag: {tag}")]
    UnknownTag {
        /// The offending tag
        tag: String,
    },

    /// Invalid state transition
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        /// Current state
        from: String,
        /// Attempted target state
        to: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
