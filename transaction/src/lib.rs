//! Spanner Transaction
//!
//! The contract the connection layer needs from the remote client.
//!
//! Responsibilities:
//! - Start a remote transaction and hand back a handle
//! - Report the handle's state as the remote manager sees it
//! - Commit or roll back through the handle

mod client;
mod handle;

pub use client::Client;
pub use handle::TransactionHandle;
