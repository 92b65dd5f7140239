//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The `Display` output of every variant is the exact message handed back to
/// clients, so messages are written for API consumers rather than for logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation, or the request contradicts itself
    /// (e.g. route id and body id differ).
    #[error("{0}")]
    Validation(String),

    /// The request collides with existing state (e.g. a duplicate name).
    #[error("{0}")]
    Conflict(String),

    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The client-facing message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Conflict(msg) | Self::NotFound(msg) => msg,
        }
    }
}
