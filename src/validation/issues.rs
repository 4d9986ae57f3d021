//! Structural problems found while validating an automaton.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem found by validation
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    #[error("Automaton has no states")]
    NoStates,

    #[error("Automaton has no initial state")]
    NoInitialState,

    #[error("State {from} has transition on '{symbol}' to non-existent state {to}")]
    DanglingTransition {
        from: StateId,
        symbol: String,
        to: StateId,
    },
}
