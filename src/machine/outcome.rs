//! Results reported by stepping and evaluating an automaton.

use crate::core::{StateId, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a symbol could not be consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The current state has no transition for the symbol
    NoTransition,

    /// The symbol maps to a state that was never registered
    UnregisteredTarget(StateId),
}

/// A symbol the automaton refused to consume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rejection<Y: Symbol = char> {
    /// The state the automaton stayed in
    pub state: StateId,
    /// The symbol that was refused
    pub symbol: Y,
    /// Symbols the state does accept, in insertion order
    pub valid_inputs: Vec<Y>,
    pub reason: RejectionReason,
}

impl<Y: Symbol> fmt::Display for Rejection<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectionReason::NoTransition => {
                write!(f, "Invalid input '{}' for state {}", self.symbol, self.state)?
            }
            RejectionReason::UnregisteredTarget(target) => write!(
                f,
                "Input '{}' for state {} leads to unregistered state {}",
                self.symbol, self.state, target
            )?,
        }
        let inputs: Vec<String> = self.valid_inputs.iter().map(ToString::to_string).collect();
        write!(f, " (valid inputs: [{}])", inputs.join(", "))
    }
}

/// Outcome of a single step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StepOutcome<Y: Symbol> {
    Transitioned,
    Rejected(Rejection<Y>),
}

/// Detailed outcome of evaluating a whole input sequence.
///
/// # Example
///
/// ```rust
/// use dfa_engine::{Automaton, State};
///
/// let mut q0: State = State::accepting("Q0");
/// q0.add_transition('x', "Q0");
///
/// let mut dfa: Automaton = Automaton::new();
/// dfa.add_state(q0);
/// dfa.set_initial_state("Q0").unwrap();
///
/// let evaluation = dfa.run("xxyx".chars()).unwrap();
/// assert!(!evaluation.accepted);
/// assert_eq!(evaluation.consumed, 2);
/// assert_eq!(evaluation.rejected_at(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Evaluation<Y: Symbol = char> {
    /// Whether the input was accepted
    pub accepted: bool,
    /// Where the automaton stopped
    pub final_state: StateId,
    /// Number of symbols consumed before stopping
    pub consumed: usize,
    /// Set when evaluation halted on a symbol it could not consume
    pub rejection: Option<Rejection<Y>>,
}

impl<Y: Symbol> Evaluation<Y> {
    /// Index of the first symbol that could not be consumed.
    pub fn rejected_at(&self) -> Option<usize> {
        self.rejection.as_ref().map(|_| self.consumed)
    }

    /// Check if evaluation halted before consuming all input.
    pub fn halted(&self) -> bool {
        self.rejection.is_some()
    }
}

impl<Y: Symbol> fmt::Display for Evaluation<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.accepted { "ACCEPTED" } else { "REJECTED" };
        match (&self.rejection, self.rejected_at()) {
            (Some(rejection), Some(position)) => {
                write!(f, "{status} at position {position}: {rejection}")
            }
            _ => write!(f, "{status} - Final state: {}", self.final_state),
        }
    }
}
