//! Core automaton data types.
//!
//! This module contains the plain data the engine is built from:
//! - Input symbols via the `Symbol` trait
//! - States and the `StateId` handles linking them
//! - Ordered transition history

mod history;
mod state;
mod symbol;

pub use history::{TransitionHistory, TransitionRecord};
pub use state::{State, StateId};
pub use symbol::Symbol;
