//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a table macro for creating
//! automata that are fully wired before they are handed out.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
