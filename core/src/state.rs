//! Transaction states reported by the remote transaction manager.

use std::fmt;

/// State of one remote transaction attempt.
///
/// The value is owned by the remote manager; the driver only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionState {
    /// The transaction was created but has not started.
    NotStarted,
    /// The transaction is open and accepting work.
    Started,
    /// The transaction was committed.
    Committed,
    /// The transaction was rolled back.
    RolledBack,
    /// The server aborted the transaction (typically a conflict).
    Aborted,
}

impl TransactionState {
    /// Returns true if no further commit or rollback is meaningful.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionState::Committed | TransactionState::RolledBack | TransactionState::Aborted
        )
    }

    /// Returns true if the transaction is open.
    pub fn is_active(&self) -> bool {
        matches!(self, TransactionState::Started)
    }

    /// Get the name the remote manager uses for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionState::NotStarted => "NOT_STARTED",
            TransactionState::Started => "STARTED",
            TransactionState::Committed => "COMMITTED",
            TransactionState::RolledBack => "ROLLED_BACK",
            TransactionState::Aborted => "ABORTED",
        }
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
