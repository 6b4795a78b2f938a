//! A logical connection and its transaction lifecycle.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use spanner_core::{ConnectionId, RemoteResult, TransactionId, TransactionState};
use spanner_transaction::{Client, TransactionHandle};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{ConnectionError, ConnectionResult};
use crate::plan::{plan_begin, plan_finish, BeginPlan, FinishPlan};

/// Remote operation forwarded to the current transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    Commit,
    Rollback,
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finish::Commit => f.write_str("commit"),
            Finish::Rollback => f.write_str("rollback"),
        }
    }
}

/// A start RPC that has been issued but whose result is not yet stored.
enum PendingStart<T> {
    /// Running as a tokio task; makes progress without being polled.
    Spawned(JoinHandle<RemoteResult<T>>),
    /// Driven by whoever polls the connection next.
    Parked(Pin<Box<dyn Future<Output = RemoteResult<T>> + Send>>),
}

/// One logical connection to the database.
///
/// The connection holds at most one transaction handle. Whether a
/// transaction is open is never tracked locally: every decision re-reads
/// the state the remote manager reports through the handle, so server-side
/// aborts are seen on the next call.
///
/// Operations take `&mut self`; a connection serves one caller at a time.
///
/// Inside a tokio runtime a genuine start runs as a spawned task. If the
/// caller drops the future returned by [`Connection::begin_transaction`]
/// while the start is in flight, the start still completes and the next
/// operation on this connection stores its result before doing anything
/// else.
///
/// No tokio runtime is required. On any other executor the start future is
/// parked on the connection instead, and an abandoned start resumes when
/// the next operation polls it. A start that panics there unwinds into the
/// caller rather than surfacing as [`ConnectionError::StartInterrupted`].
pub struct Connection<C: Client> {
    id: ConnectionId,
    client: Arc<C>,
    current: Option<C::Transaction>,
    pending_start: Option<PendingStart<C::Transaction>>,
}

impl<C: Client> Connection<C> {
    /// Create a connection with no transaction.
    pub fn new(client: Arc<C>) -> Self {
        Self {
            id: ConnectionId::next(),
            client,
            current: None,
            pending_start: None,
        }
    }

    /// Get the connection ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Get the client this connection starts transactions on.
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// The last successfully started transaction, if any.
    pub fn current_transaction(&self) -> Option<&C::Transaction> {
        self.current.as_ref()
    }

    /// Current state of the held transaction, read fresh from the handle.
    pub fn transaction_state(&self) -> Option<TransactionState> {
        self.current.as_ref().map(|txn| txn.state())
    }

    /// Check if the held transaction is open.
    pub fn is_in_transaction(&self) -> bool {
        self.transaction_state()
            .map(|state| state.is_active())
            .unwrap_or(false)
    }

    // ========== Transaction Lifecycle ==========

    /// Begin a transaction.
    ///
    /// Completes immediately if the current transaction is still open.
    /// Otherwise starts a new remote transaction and replaces the current
    /// handle once the start succeeds. A failed start leaves the previous
    /// handle in place.
    pub async fn begin_transaction(&mut self) -> ConnectionResult<()> {
        self.settle_abandoned_start().await;

        match plan_begin(self.transaction_state()) {
            BeginPlan::Reuse => {
                debug!(
                    connection = %self.id,
                    transaction = ?self.current_id(),
                    "transaction already started, begin is a no-op"
                );
                Ok(())
            }
            BeginPlan::Start => {
                self.dispatch_start();
                self.await_start().await
            }
        }
    }

    /// Commit the current transaction.
    ///
    /// Completes without remote work if no transaction was ever started.
    /// A failed commit keeps the handle, so the caller may retry or roll back.
    pub async fn commit_transaction(&mut self) -> ConnectionResult<()> {
        self.finish(Finish::Commit).await
    }

    /// Roll back the current transaction.
    ///
    /// Completes without remote work if no transaction was ever started.
    pub async fn rollback_transaction(&mut self) -> ConnectionResult<()> {
        self.finish(Finish::Rollback).await
    }

    // ========== Internal Helpers ==========

    fn current_id(&self) -> Option<TransactionId> {
        self.current.as_ref().map(|txn| txn.id())
    }

    async fn finish(&mut self, action: Finish) -> ConnectionResult<()> {
        self.settle_abandoned_start().await;

        let txn = match plan_finish(self.current.as_ref()) {
            FinishPlan::Nothing => {
                debug!(connection = %self.id, %action, "no transaction to {action}, nothing to do");
                return Ok(());
            }
            FinishPlan::Delegate(txn) => txn,
        };

        let state = txn.state();
        debug!(
            connection = %self.id,
            transaction = %txn.id(),
            %state,
            terminal = state.is_terminal(),
            %action,
            "forwarding to remote transaction"
        );

        let result = match action {
            Finish::Commit => txn.commit().await,
            Finish::Rollback => txn.rollback().await,
        };

        match result {
            Ok(()) => {
                debug!(
                    connection = %self.id,
                    transaction = %txn.id(),
                    %action,
                    "remote {action} completed"
                );
                Ok(())
            }
            Err(err) => {
                debug!(
                    connection = %self.id,
                    transaction = %txn.id(),
                    %action,
                    error = %err,
                    "remote {action} failed"
                );
                Err(err.into())
            }
        }
    }

    fn dispatch_start(&mut self) {
        debug!(
            connection = %self.id,
            replacing = ?self.current_id(),
            "starting remote transaction"
        );
        let client = Arc::clone(&self.client);
        let start = async move { client.start_transaction().await };
        self.pending_start = Some(match Handle::try_current() {
            Ok(runtime) => PendingStart::Spawned(runtime.spawn(start)),
            Err(_) => PendingStart::Parked(Box::pin(start)),
        });
    }

    /// Wait for the in-flight start and store its handle.
    ///
    /// The pending start stays on the connection until it yields a result,
    /// so dropping this future mid-wait leaves the start for the next call.
    async fn await_start(&mut self) -> ConnectionResult<()> {
        let outcome = match self.pending_start.as_mut() {
            None => return Ok(()),
            Some(PendingStart::Spawned(task)) => task
                .await
                .map_err(|join_err| ConnectionError::start_interrupted(join_err.to_string())),
            Some(PendingStart::Parked(start)) => Ok(start.as_mut().await),
        };
        self.pending_start = None;

        let txn = match outcome? {
            Ok(txn) => txn,
            Err(err) => {
                debug!(connection = %self.id, error = %err, "remote transaction start failed");
                return Err(err.into());
            }
        };

        debug!(
            connection = %self.id,
            transaction = %txn.id(),
            "remote transaction started"
        );
        self.current = Some(txn);
        Ok(())
    }

    /// Store the result of a start whose caller went away.
    async fn settle_abandoned_start(&mut self) {
        if self.pending_start.is_none() {
            return;
        }
        if let Err(err) = self.await_start().await {
            warn!(
                connection = %self.id,
                error = %err,
                "abandoned transaction start failed, keeping previous transaction"
            );
        }
    }
}

impl<C: Client> fmt::Debug for Connection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("id", &self.id)
            .field("transaction", &self.current_id())
            .field("state", &self.transaction_state())
            .field("start_in_flight", &self.pending_start.is_some())
            .finish()
    }
}
