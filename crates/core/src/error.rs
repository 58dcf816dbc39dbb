//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Two kinds suffice for this layer: structural/value-range violations and
/// policy rejections. Every failure is synchronous and terminal for the
/// call; nothing here is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (empty items, negative id, wrong enum
    /// value, malformed input map, ...). The caller must supply corrected
    /// input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A policy rejection, distinct from structural invalidity (role
    /// mismatch, identifier-prefix mismatch). The caller should halt the
    /// privileged operation rather than retry.
    #[error("access denied: {0}")]
    AccessDenied(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn access_denied(msg: impl Into<String>) -> Self {
        Self::AccessDenied(msg.into())
    }
}
