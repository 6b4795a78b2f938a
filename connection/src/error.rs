//! Connection error types.

use spanner_core::RemoteError;
use thiserror::Error;

/// Connection errors.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The remote client failed; surfaced unchanged.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The dispatched start task never produced a result.
    #[error("transaction start interrupted: {message}")]
    StartInterrupted { message: String },
}

impl ConnectionError {
    pub fn start_interrupted(message: impl Into<String>) -> Self {
        Self::StartInterrupted {
            message: message.into(),
        }
    }

    /// Get the remote failure, if this error came from the client.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            ConnectionError::Remote(err) => Some(err),
            ConnectionError::StartInterrupted { .. } => None,
        }
    }
}

/// Result type for connection operations.
pub type ConnectionResult<T> = Result<T, ConnectionError>;
