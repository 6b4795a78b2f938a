//! Test tooling for the Spanner driver.
//!
//! [`RecordingClient`] stands in for the remote client: it simulates the
//! remote transaction manager in memory and records every RPC so tests can
//! assert on exactly how many starts, commits and rollbacks were issued.

mod client;
mod transaction;

pub use client::RecordingClient;
pub use transaction::RecordedTransaction;
