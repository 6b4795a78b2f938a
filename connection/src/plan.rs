//! Lifecycle decisions.
//!
//! Each operation on a connection first picks one of a few continuations
//! from the state the remote manager reports right now:
//!
//! ```text
//! NO_TRANSACTION --begin-->            STARTED          (start RPC)
//! STARTED        --begin-->            STARTED          (no-op)
//! STARTED        --commit/rollback-->  TERMINAL         (delegate)
//! TERMINAL       --begin-->            STARTED          (start RPC, new handle)
//! NO_TRANSACTION --commit/rollback-->  NO_TRANSACTION   (no-op)
//! ```

use spanner_core::TransactionState;

/// What `begin_transaction` should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginPlan {
    /// The current transaction is open; complete without remote work.
    Reuse,
    /// Ask the client for a new transaction and replace the current one.
    Start,
}

/// What `commit_transaction` / `rollback_transaction` should do.
#[derive(Debug, PartialEq, Eq)]
pub enum FinishPlan<'a, T> {
    /// No transaction was ever opened; complete without remote work.
    Nothing,
    /// Forward the operation to this handle.
    Delegate(&'a T),
}

/// Decide how to begin, given the state of the current handle (if any).
///
/// `NotStarted` is treated like a finished transaction: the handle is
/// replaced rather than revived.
pub fn plan_begin(current: Option<TransactionState>) -> BeginPlan {
    match current {
        Some(TransactionState::Started) => BeginPlan::Reuse,
        Some(_) | None => BeginPlan::Start,
    }
}

/// Decide how to commit or roll back.
///
/// Any present handle is delegated to, whatever its state; rejecting a
/// commit of a finished transaction is the remote manager's call.
pub fn plan_finish<T>(current: Option<&T>) -> FinishPlan<'_, T> {
    match current {
        Some(txn) => FinishPlan::Delegate(txn),
        None => FinishPlan::Nothing,
    }
}
