//! The remote client that opens transactions.

use async_trait::async_trait;
use spanner_core::RemoteResult;

use crate::handle::TransactionHandle;

/// Starts remote transactions.
///
/// Implementations own retries, pooling and session management; a call to
/// [`Client::start_transaction`] is exactly one attempt to open one
/// transaction.
#[async_trait]
pub trait Client: Send + Sync + 'static {
    /// Handle type produced by this client.
    type Transaction: TransactionHandle;

    /// Begin a new remote transaction.
    async fn start_transaction(&self) -> RemoteResult<Self::Transaction>;
}
