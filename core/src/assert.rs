//! Lightweight argument checks.

use crate::InvalidArgument;

/// Unwrap a required input, failing with [`InvalidArgument`] carrying
/// `message` verbatim if it is absent.
pub fn require<T>(value: Option<T>, message: &str) -> Result<T, InvalidArgument> {
    value.ok_or_else(|| InvalidArgument::new(message))
}
