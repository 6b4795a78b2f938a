//! Spanner Core Types
//!
//! This crate provides the vocabulary shared by every layer of the driver:
//! - Transaction states as reported by the remote transaction manager
//! - Identity types (ConnectionId, TransactionId)
//! - Remote failure and argument validation errors

mod assert;
mod error;
mod id;
mod state;

pub use assert::require;
pub use error::*;
pub use id::*;
pub use state::TransactionState;
