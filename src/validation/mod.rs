//! Structural validation for automata.
//!
//! Validation uses Stillwater's `Validation` type to accumulate ALL issues
//! instead of stopping at the first one, so a misbuilt automaton can be
//! fixed in a single pass.
//!
//! Validation is advisory. `step` and `evaluate` run on unvalidated
//! automata too; only the builder refuses to hand out an automaton that
//! fails these checks.
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::validation::{check_automaton, collect_issues, ValidationIssue};
//! use dfa_engine::{Automaton, State};
//!
//! let mut q0: State = State::new("Q0");
//! q0.add_transition('a', "MISSING");
//!
//! let mut dfa: Automaton = Automaton::new();
//! dfa.add_state(q0);
//!
//! let report = check_automaton(&dfa);
//! assert!(report.is_failure());
//! assert_eq!(collect_issues(&report).len(), 2);
//! assert!(collect_issues(&report).contains(&ValidationIssue::NoInitialState));
//! ```

pub mod issues;
pub mod rules;

pub use issues::ValidationIssue;
pub use rules::{check_automaton, collect_issues, ValidationReport};
