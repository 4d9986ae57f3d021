//! Errors raised by misusing the automaton API.

use thiserror::Error;

/// Errors raised when the automaton is driven in the wrong order.
///
/// An unmapped input symbol is never an error. It is reported as a normal
/// rejection through the boolean results of `step` and `evaluate`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("State '{name}' does not exist")]
    UnknownState { name: String },

    #[error("No initial state set. Call set_initial_state before running the automaton")]
    NotConfigured,
}
