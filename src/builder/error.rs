//! Build errors for the automaton builder.

use crate::machine::AutomatonError;
use crate::validation::ValidationIssue;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Transition declared from state '{name}', which was never declared")]
    UnknownSourceState { name: String },

    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    #[error("Automaton failed validation with {} issue(s)", .issues.len())]
    Invalid { issues: Vec<ValidationIssue> },
}
