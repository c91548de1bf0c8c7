//! Cross-cutting error types for Franchise Intel.
//!
//! Domain-specific errors (`DatabaseError`, `AuthError`, `ConfigError`) live
//! in their own crates and converge into `anyhow` inside `fintel-cli`.

use thiserror::Error;

/// Errors that can be raised by any Franchise Intel crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// User input rejected before reaching the backend. The message is shown
    /// to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// A path that does not map to any navigable route.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
