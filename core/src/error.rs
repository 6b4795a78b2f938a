//! Common error types for the driver.

use thiserror::Error;

/// Failures reported by the remote client while starting, committing or
/// rolling back a transaction.
///
/// These are surfaced to callers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The service could not be reached.
    #[error("service unavailable: {message}")]
    Unavailable { message: String },

    /// The server aborted the transaction, usually because of a conflict.
    #[error("transaction aborted: {message}")]
    Aborted { message: String },

    /// The server rejected the request.
    #[error("request rejected: {message}")]
    Rejected { message: String },

    /// Any other server-side failure.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RemoteError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn aborted(message: impl Into<String>) -> Self {
        Self::Aborted {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the server aborted the transaction.
    ///
    /// Only the caller knows whether replaying the transaction is safe.
    pub fn is_aborted(&self) -> bool {
        matches!(self, RemoteError::Aborted { .. })
    }
}

/// A required input was absent or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidArgument {
    pub message: String,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;
