//! In-memory remote client.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use spanner_core::{RemoteError, RemoteResult, TransactionId, TransactionState};
use spanner_transaction::{Client, TransactionHandle};
use tokio::sync::watch;

use crate::transaction::RecordedTransaction;

/// A [`Client`] that simulates the remote transaction manager and records
/// every start RPC.
///
/// New transactions report [`TransactionState::Started`]; a successful
/// commit or rollback moves them to the matching terminal state.
pub struct RecordingClient {
    next_id: AtomicU64,
    starts: AtomicUsize,
    start_failures: Mutex<VecDeque<RemoteError>>,
    panic_next_start: AtomicBool,
    transactions: Mutex<Vec<RecordedTransaction>>,
    /// `true` while starts may complete.
    gate: watch::Sender<bool>,
}

impl RecordingClient {
    /// Create a client with no recorded RPCs.
    pub fn new() -> Self {
        let (gate, _) = watch::channel(true);
        Self {
            next_id: AtomicU64::new(1),
            starts: AtomicUsize::new(0),
            start_failures: Mutex::new(VecDeque::new()),
            panic_next_start: AtomicBool::new(false),
            transactions: Mutex::new(Vec::new()),
            gate,
        }
    }

    /// Number of start RPCs issued, including failed and held ones.
    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    /// Number of commit RPCs issued across all transactions.
    pub fn commit_count(&self) -> usize {
        self.transactions.lock().iter().map(|t| t.commit_count()).sum()
    }

    /// Number of rollback RPCs issued across all transactions.
    pub fn rollback_count(&self) -> usize {
        self.transactions.lock().iter().map(|t| t.rollback_count()).sum()
    }

    /// All transactions started so far, oldest first.
    pub fn transactions(&self) -> Vec<RecordedTransaction> {
        self.transactions.lock().clone()
    }

    /// The most recently started transaction.
    pub fn last_transaction(&self) -> Option<RecordedTransaction> {
        self.transactions.lock().last().cloned()
    }

    /// Find a started transaction by id.
    pub fn transaction(&self, id: TransactionId) -> Option<RecordedTransaction> {
        self.transactions
            .lock()
            .iter()
            .find(|t| t.id() == id)
            .cloned()
    }

    /// Override the state the remote manager reports for `id`.
    pub fn set_state(&self, id: TransactionId, state: TransactionState) {
        if let Some(txn) = self.transaction(id) {
            txn.set_state(state);
        }
    }

    /// Simulate a server-side abort of `id`.
    pub fn abort(&self, id: TransactionId) {
        self.set_state(id, TransactionState::Aborted);
    }

    /// Make the next start RPC fail with `err`.
    pub fn fail_next_start(&self, err: RemoteError) {
        self.start_failures.lock().push_back(err);
    }

    /// Make the next start RPC panic instead of returning.
    pub fn panic_next_start(&self) {
        self.panic_next_start.store(true, Ordering::SeqCst);
    }

    /// Keep start RPCs in flight until [`RecordingClient::release_starts`].
    pub fn hold_starts(&self) {
        self.gate.send_replace(false);
    }

    /// Let held and future start RPCs complete.
    pub fn release_starts(&self) {
        self.gate.send_replace(true);
    }
}

impl Default for RecordingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Client for RecordingClient {
    type Transaction = RecordedTransaction;

    async fn start_transaction(&self) -> RemoteResult<RecordedTransaction> {
        self.starts.fetch_add(1, Ordering::SeqCst);

        let mut gate = self.gate.subscribe();
        if gate.wait_for(|open| *open).await.is_err() {
            return Err(RemoteError::unavailable("client shut down"));
        }

        if self.panic_next_start.swap(false, Ordering::SeqCst) {
            panic!("start RPC crashed");
        }
        if let Some(err) = self.start_failures.lock().pop_front() {
            return Err(err);
        }

        let id = TransactionId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let txn = RecordedTransaction::new(id, TransactionState::Started);
        self.transactions.lock().push(txn.clone());
        Ok(txn)
    }
}
