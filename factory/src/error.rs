//! Factory error types.

use spanner_core::InvalidArgument;
use thiserror::Error;

/// Factory errors.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// A required option was absent or malformed.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The options name a driver other than this one.
    #[error("unsupported driver: {driver}")]
    UnsupportedDriver { driver: String },
}

impl FactoryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(InvalidArgument::new(message))
    }

    pub fn unsupported_driver(driver: impl Into<String>) -> Self {
        Self::UnsupportedDriver {
            driver: driver.into(),
        }
    }
}

/// Result type for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;
