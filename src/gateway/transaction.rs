//! Transaction boundary tracking
//!
//! All requests share one connection, so at most one transaction may be
//! open at a time. The state belongs to whoever owns the connection and is
//! threaded through [`guard`] before each statement runs.
//!
//! Statements are matched exactly (case-sensitive, no trimming). Because the
//! state is per connection rather than per caller, concurrent callers see
//! each other's open transaction.

use super::errors::{GatewayError, GatewayResult};

const BEGIN: &str = "BEGIN";
const COMMIT: &str = "COMMIT";
const ROLLBACK: &str = "ROLLBACK";

/// Whether a transaction is open on the shared connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionState {
    in_transaction: bool,
}

impl TransactionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_transaction(&self) -> bool {
        self.in_transaction
    }

    /// Forget an open transaction (used when a `BEGIN` did not execute)
    pub fn reset(&mut self) {
        self.in_transaction = false;
    }
}

/// Statement kind as seen by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionBoundary {
    Begin,
    End,
    None,
}

/// Check `sql` against the transaction state and apply its transition.
pub fn guard(state: &mut TransactionState, sql: &str) -> GatewayResult<TransactionBoundary> {
    match sql {
        BEGIN => {
            if state.in_transaction {
                return Err(GatewayError::TransactionInProgress);
            }
            state.in_transaction = true;
            Ok(TransactionBoundary::Begin)
        }
        COMMIT | ROLLBACK => {
            state.in_transaction = false;
            Ok(TransactionBoundary::End)
        }
        _ => Ok(TransactionBoundary::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_opens_transaction() {
        let mut state = TransactionState::new();
        assert_eq!(guard(&mut state, "BEGIN"), Ok(TransactionBoundary::Begin));
        assert!(state.in_transaction());
    }

    #[test]
    fn test_nested_begin_rejected_without_mutation() {
        let mut state = TransactionState::new();
        guard(&mut state, "BEGIN").unwrap();
        let before = state;

        assert_eq!(
            guard(&mut state, "BEGIN"),
            Err(GatewayError::TransactionInProgress)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_begin_commit_begin_cycles() {
        let mut state = TransactionState::new();
        for _ in 0..3 {
            assert!(guard(&mut state, "BEGIN").is_ok());
            assert_eq!(guard(&mut state, "COMMIT"), Ok(TransactionBoundary::End));
            assert!(!state.in_transaction());
        }
    }

    #[test]
    fn test_rollback_without_begin_is_noop() {
        let mut state = TransactionState::new();
        assert_eq!(guard(&mut state, "ROLLBACK"), Ok(TransactionBoundary::End));
        assert!(!state.in_transaction());
        assert!(guard(&mut state, "BEGIN").is_ok());
    }

    #[test]
    fn test_other_statements_pass_through() {
        let mut state = TransactionState::new();
        guard(&mut state, "BEGIN").unwrap();
        assert_eq!(
            guard(&mut state, "SELECT 1"),
            Ok(TransactionBoundary::None)
        );
        assert!(state.in_transaction());
    }

    #[test]
    fn test_matching_is_exact() {
        let mut state = TransactionState::new();
        guard(&mut state, "BEGIN").unwrap();

        for sql in ["begin", " BEGIN", "BEGIN;", "START TRANSACTION"] {
            assert_eq!(guard(&mut state, sql), Ok(TransactionBoundary::None));
        }
        for sql in ["commit", "COMMIT ", "rollback"] {
            assert_eq!(guard(&mut state, sql), Ok(TransactionBoundary::None));
            assert!(state.in_transaction());
        }
    }

    #[test]
    fn test_reset_clears() {
        let mut state = TransactionState::new();
        guard(&mut state, "BEGIN").unwrap();
        state.reset();
        assert!(!state.in_transaction());
    }
}
