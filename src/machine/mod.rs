//! The automaton runtime.
//!
//! [`Automaton`] owns a set of states, a cursor, and the history of the
//! current run. It exposes stepping, whole-input evaluation, reset, and
//! introspection. Diagnostics flow through an injected [`Observer`].

mod automaton;
mod error;
mod observer;
mod outcome;
mod summary;

pub use automaton::Automaton;
pub use error::AutomatonError;
pub use observer::{NoopObserver, Observer, TracingObserver};
pub use outcome::{Evaluation, Rejection, RejectionReason};
pub use summary::{Edge, Summary};
