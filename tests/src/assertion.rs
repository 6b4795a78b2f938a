//! Assertion types and builders for verifying step results.

use spanner_core::{TransactionId, TransactionState};

/// What a step left behind, as seen from outside the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// `Err` carries the rendered error of a failed operation.
    pub outcome: Result<(), String>,
    pub starts: usize,
    pub commits: usize,
    pub rollbacks: usize,
    pub state: Option<TransactionState>,
    pub before: Option<TransactionId>,
    pub after: Option<TransactionId>,
}

/// Expectations for one step. Unset fields are not checked.
#[derive(Debug, Default)]
pub struct Assertion {
    pub error: Option<String>,
    pub starts: Option<usize>,
    pub commits: Option<usize>,
    pub rollbacks: Option<usize>,
    pub state: Option<Option<TransactionState>>,
    pub new_transaction: Option<bool>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the operation to fail with an error containing `fragment`.
    pub fn error(mut self, fragment: impl Into<String>) -> Self {
        self.error = Some(fragment.into());
        self
    }

    /// Expect `n` start RPCs in total so far.
    pub fn starts(mut self, n: usize) -> Self {
        self.starts = Some(n);
        self
    }

    /// Expect `n` commit RPCs in total so far.
    pub fn commits(mut self, n: usize) -> Self {
        self.commits = Some(n);
        self
    }

    /// Expect `n` rollback RPCs in total so far.
    pub fn rollbacks(mut self, n: usize) -> Self {
        self.rollbacks = Some(n);
        self
    }

    /// Expect the held transaction to report `state`.
    pub fn state(mut self, state: TransactionState) -> Self {
        self.state = Some(Some(state));
        self
    }

    /// Expect the connection to hold no transaction.
    pub fn no_transaction(mut self) -> Self {
        self.state = Some(None);
        self
    }

    /// Expect the step to have replaced the held transaction.
    pub fn new_transaction(mut self) -> Self {
        self.new_transaction = Some(true);
        self
    }

    /// Expect the step to have kept the held transaction.
    pub fn same_transaction(mut self) -> Self {
        self.new_transaction = Some(false);
        self
    }

    /// Verify the assertion against an observation.
    pub fn verify(&self, observed: &Observation) -> Result<(), String> {
        match (&self.error, &observed.outcome) {
            (Some(expected), Err(msg)) if !msg.contains(expected.as_str()) => {
                return Err(format!(
                    "expected error containing '{}', got: {}",
                    expected, msg
                ));
            }
            (Some(expected), Ok(())) => {
                return Err(format!(
                    "expected error containing '{}', but step succeeded",
                    expected
                ));
            }
            (None, Err(msg)) => return Err(format!("step failed: {}", msg)),
            _ => {}
        }

        check_count("start", self.starts, observed.starts)?;
        check_count("commit", self.commits, observed.commits)?;
        check_count("rollback", self.rollbacks, observed.rollbacks)?;

        if let Some(expected) = self.state {
            if observed.state != expected {
                return Err(format!(
                    "expected state {:?}, got {:?}",
                    expected, observed.state
                ));
            }
        }

        if let Some(expected) = self.new_transaction {
            let replaced = observed.after.is_some() && observed.after != observed.before;
            if replaced != expected {
                return Err(format!(
                    "expected {} transaction, went from {:?} to {:?}",
                    if expected { "a new" } else { "the same" },
                    observed.before,
                    observed.after
                ));
            }
        }

        Ok(())
    }
}

fn check_count(what: &str, expected: Option<usize>, actual: usize) -> Result<(), String> {
    match expected {
        Some(expected) if expected != actual => Err(format!(
            "expected {} {} RPCs, got {}",
            expected, what, actual
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed() -> Observation {
        Observation {
            outcome: Ok(()),
            starts: 1,
            commits: 0,
            rollbacks: 0,
            state: Some(TransactionState::Started),
            before: None,
            after: Some(TransactionId::new(1)),
        }
    }

    #[test]
    fn test_matching_assertion_passes() {
        let assertion = Assertion::new()
            .starts(1)
            .state(TransactionState::Started)
            .new_transaction();

        assert_eq!(assertion.verify(&observed()), Ok(()));
    }

    #[test]
    fn test_count_mismatch_fails() {
        let assertion = Assertion::new().starts(2);

        let err = assertion.verify(&observed()).unwrap_err();

        assert_eq!(err, "expected 2 start RPCs, got 1");
    }

    #[test]
    fn test_unexpected_success_fails() {
        let assertion = Assertion::new().error("aborted");

        assert!(assertion.verify(&observed()).is_err());
    }
}
