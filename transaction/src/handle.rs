//! Handle to one remote transaction attempt.

use async_trait::async_trait;
use spanner_core::{RemoteResult, TransactionId, TransactionState};

/// An opaque reference to a remote transaction.
///
/// The state is authoritative and owned by the remote manager. It can move
/// on its own (a server-side abort), so callers must read it fresh instead
/// of caching anything derived from it.
#[async_trait]
pub trait TransactionHandle: Send + Sync + 'static {
    /// Identity of this transaction attempt.
    fn id(&self) -> TransactionId;

    /// Current state as reported by the remote manager. Side-effect free.
    fn state(&self) -> TransactionState;

    /// Commit the transaction.
    async fn commit(&self) -> RemoteResult<()>;

    /// Roll the transaction back.
    async fn rollback(&self) -> RemoteResult<()>;
}
