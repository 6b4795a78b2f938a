//! Simulated remote transaction.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use spanner_core::{RemoteError, RemoteResult, TransactionId, TransactionState};
use spanner_transaction::TransactionHandle;

struct Shared {
    id: TransactionId,
    state: Mutex<TransactionState>,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
    commit_failures: Mutex<VecDeque<RemoteError>>,
    rollback_failures: Mutex<VecDeque<RemoteError>>,
}

/// A transaction handed out by [`RecordingClient`](crate::RecordingClient).
///
/// Clones share state, so a test can keep one clone and steer the state the
/// connection observes through its own clone.
#[derive(Clone)]
pub struct RecordedTransaction {
    shared: Arc<Shared>,
}

impl RecordedTransaction {
    pub(crate) fn new(id: TransactionId, state: TransactionState) -> Self {
        Self {
            shared: Arc::new(Shared {
                id,
                state: Mutex::new(state),
                commits: AtomicUsize::new(0),
                rollbacks: AtomicUsize::new(0),
                commit_failures: Mutex::new(VecDeque::new()),
                rollback_failures: Mutex::new(VecDeque::new()),
            }),
        }
    }

    /// Override the state the remote manager reports.
    pub fn set_state(&self, state: TransactionState) {
        *self.shared.state.lock() = state;
    }

    /// Simulate a server-side abort.
    pub fn abort(&self) {
        self.set_state(TransactionState::Aborted);
    }

    /// Make the next commit RPC fail with `err`, leaving the state unchanged.
    pub fn fail_next_commit(&self, err: RemoteError) {
        self.shared.commit_failures.lock().push_back(err);
    }

    /// Make the next rollback RPC fail with `err`, leaving the state unchanged.
    pub fn fail_next_rollback(&self, err: RemoteError) {
        self.shared.rollback_failures.lock().push_back(err);
    }

    /// Number of commit RPCs issued against this transaction.
    pub fn commit_count(&self) -> usize {
        self.shared.commits.load(Ordering::SeqCst)
    }

    /// Number of rollback RPCs issued against this transaction.
    pub fn rollback_count(&self) -> usize {
        self.shared.rollbacks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionHandle for RecordedTransaction {
    fn id(&self) -> TransactionId {
        self.shared.id
    }

    fn state(&self) -> TransactionState {
        *self.shared.state.lock()
    }

    async fn commit(&self) -> RemoteResult<()> {
        self.shared.commits.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.shared.commit_failures.lock().pop_front() {
            return Err(err);
        }

        let mut state = self.shared.state.lock();
        match *state {
            TransactionState::Started => {
                *state = TransactionState::Committed;
                Ok(())
            }
            TransactionState::Aborted => Err(RemoteError::aborted(format!(
                "{} was aborted by the server",
                self.shared.id
            ))),
            other => Err(RemoteError::rejected(format!(
                "cannot commit {} in state {}",
                self.shared.id, other
            ))),
        }
    }

    async fn rollback(&self) -> RemoteResult<()> {
        self.shared.rollbacks.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.shared.rollback_failures.lock().pop_front() {
            return Err(err);
        }

        let mut state = self.shared.state.lock();
        match *state {
            TransactionState::Started => {
                *state = TransactionState::RolledBack;
                Ok(())
            }
            // Nothing left to undo on the server.
            TransactionState::Aborted => Ok(()),
            other => Err(RemoteError::rejected(format!(
                "cannot roll back {} in state {}",
                self.shared.id, other
            ))),
        }
    }
}

impl std::fmt::Debug for RecordedTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordedTransaction")
            .field("id", &self.shared.id)
            .field("state", &self.state())
            .finish()
    }
}
