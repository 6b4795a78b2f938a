//! Spanner Connection
//!
//! Transaction lifecycle for a single logical connection.
//!
//! Responsibilities:
//! - Decide whether BEGIN starts a remote transaction or is a no-op
//! - Forward COMMIT/ROLLBACK to the open transaction, or do nothing
//! - Hold at most one transaction handle, replaced only after a successful start
//! - Let an abandoned start settle before the next operation

mod connection;
mod error;
mod plan;

pub use connection::Connection;
pub use error::{ConnectionError, ConnectionResult};
pub use plan::{plan_begin, plan_finish, BeginPlan, FinishPlan};
