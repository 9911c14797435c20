//! Unified error handling for the directory engine.
//!
//! Provides a unified `DirectoryError` the boundary layer can hold as its
//! single error type, plus a [`kind`](DirectoryError::kind) classifier
//! that collapses the taxonomy into the outcomes a transport maps to its
//! own status vocabulary (for HTTP: not-found and empty-search to 404,
//! conflicts and invalid fields to 409, too-large to 413, everything else
//! to 500).

use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::contact::ValidationError;
use crate::upload::UploadError;

/// Application-level error type for the directory engine.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Field validation failed before any store interaction.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Upload storage failed.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Outcome classification for the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Single-item lookup target does not exist.
    NotFound,
    /// A multi-result search matched nothing.
    SearchEmpty,
    /// Uniqueness violation on email, contact number, or username.
    Conflict,
    /// A field failed format validation (phone, email, name length).
    InvalidFormat,
    /// Birth date lies in the future.
    InvalidDate,
    /// Upload exceeded the byte ceiling.
    TooLarge,
    /// Infrastructure failure; details should not reach clients.
    Internal,
}

impl DirectoryError {
    /// Classify this error into a boundary-facing outcome.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(err) => match err {
                ValidationError::BirthDate(_) => ErrorKind::InvalidDate,
                ValidationError::FirstName(_)
                | ValidationError::LastName(_)
                | ValidationError::Email(_)
                | ValidationError::ContactNumber(_) => ErrorKind::InvalidFormat,
            },
            Self::Repository(err) => match err {
                RepositoryError::NotFound => ErrorKind::NotFound,
                RepositoryError::SearchEmpty => ErrorKind::SearchEmpty,
                RepositoryError::Conflict(_) => ErrorKind::Conflict,
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    ErrorKind::Internal
                }
            },
            Self::Upload(err) => match err {
                UploadError::TooLarge { .. } => ErrorKind::TooLarge,
                UploadError::Io(_) => ErrorKind::Internal,
            },
        }
    }
}

/// Result type alias for `DirectoryError`.
pub type Result<T> = std::result::Result<T, DirectoryError>;
