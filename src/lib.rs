//! dfa-engine: a deterministic finite automaton runtime
//!
//! States are plain data linked by name handles, so cyclic transition graphs
//! need no shared ownership. An [`Automaton`] owns its states, tracks a
//! cursor, records the transitions of the current run, and reports activity
//! through a pluggable [`Observer`](machine::Observer).
//!
//! # Core Concepts
//!
//! - **State**: a named node with outgoing transitions and an acceptance flag
//! - **Automaton**: runs input one symbol at a time or as a whole sequence
//! - **Rejection**: an unmapped symbol is a normal `false` result, never an error
//! - **Validation**: advisory structural checks that report every issue at once
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::{Automaton, State};
//!
//! let mut start: State = State::new("START");
//! let mut zero: State = State::new("ZERO");
//! let mut accept: State = State::accepting("ACCEPT");
//!
//! start.add_transition('0', &zero);
//! start.add_transition('1', "START");
//! zero.add_transition('0', "ZERO");
//! zero.add_transition('1', &accept);
//! accept.add_transition('0', &zero);
//! accept.add_transition('1', &start);
//!
//! let mut dfa: Automaton = Automaton::new();
//! dfa.add_state(start);
//! dfa.add_state(zero);
//! dfa.add_state(accept);
//! dfa.set_initial_state("START").unwrap();
//!
//! assert!(dfa.accepts("101").unwrap());
//! assert!(!dfa.accepts("10").unwrap());
//! assert_eq!(dfa.history().len(), 2);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, BuildError};
pub use crate::core::{State, StateId, Symbol, TransitionHistory, TransitionRecord};
pub use crate::machine::{Automaton, AutomatonError, Evaluation, Observer, Rejection};
