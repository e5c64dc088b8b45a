//! Error types for `SWPlanet`.
//!
//! [`Error`] is the error every service operation returns. Storage backends
//! report [`StorageError`](crate::storage::StorageError) instead; the service
//! translates those into the kinds declared here.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type alias for `SWPlanet` service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `SWPlanet` operations.
///
/// Error codes follow the pattern `SWP-XXX` and are stable across releases.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is empty or missing (SWP-001).
    #[error("[SWP-001] Validation error: {0}")]
    Validation(String),

    /// A planet with the same name already exists (SWP-002).
    #[error("[SWP-002] Planet '{0}' already exists")]
    Conflict(String),

    /// No planet has the requested id (SWP-003).
    #[error("[SWP-003] Planet with ID '{0}' not found")]
    NotFound(u64),

    /// The storage backend failed (SWP-004).
    ///
    /// The message is meant for logs, not for API clients.
    #[error("[SWP-004] Storage error: {0}")]
    Storage(String),

    /// Configuration error (SWP-005).
    #[error("[SWP-005] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "SWP-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "SWP-001",
            Self::Conflict(_) => "SWP-002",
            Self::NotFound(_) => "SWP-003",
            Self::Storage(_) => "SWP-004",
            Self::Config(_) => "SWP-005",
        }
    }

    /// Returns true if the caller can fix the request and retry.
    ///
    /// Storage and configuration faults are on the server side.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Conflict(_) | Self::NotFound(_)
        )
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UniqueViolation { value, .. } => Self::Conflict(value),
            StorageError::RowNotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
