//! Pluggable diagnostics for automaton activity.
//!
//! The automaton never logs directly. It notifies an [`Observer`], and the
//! default [`TracingObserver`] turns those notifications into `tracing`
//! events. Swap in [`NoopObserver`] to silence a hot loop, or implement the
//! trait to collect traces for a presentation layer.

use crate::core::{State, StateId, Symbol, TransitionRecord};
use crate::machine::outcome::{Evaluation, Rejection};
use crate::validation::ValidationIssue;

/// Receives notifications from an automaton.
///
/// Every method has an empty default, so implementors only override what
/// they care about.
///
/// # Example
///
/// ```rust
/// use dfa_engine::machine::Observer;
/// use dfa_engine::core::TransitionRecord;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Default)]
/// struct StepCounter(AtomicUsize);
///
/// impl Observer<char> for StepCounter {
///     fn transitioned(&self, _record: &TransitionRecord<char>) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait Observer<Y: Symbol>: Send + Sync {
    /// A state was registered. `replaced` is set when it overwrote a state
    /// with the same name.
    fn state_added(&self, _state: &State<Y>, _replaced: bool) {}

    fn initial_state_set(&self, _initial: &StateId) {}

    fn reset(&self, _initial: &StateId) {}

    fn transitioned(&self, _record: &TransitionRecord<Y>) {}

    fn rejected(&self, _rejection: &Rejection<Y>) {}

    fn evaluated(&self, _evaluation: &Evaluation<Y>) {}

    /// Validation finished. An empty slice means it passed.
    fn validated(&self, _issues: &[ValidationIssue]) {}
}

/// Observer that emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<Y: Symbol> Observer<Y> for TracingObserver {
    fn state_added(&self, state: &State<Y>, replaced: bool) {
        tracing::info!(
            state = %state.id(),
            accepting = state.is_accepting(),
            replaced,
            "added state"
        );
    }

    fn initial_state_set(&self, initial: &StateId) {
        tracing::info!(state = %initial, "set initial state");
    }

    fn reset(&self, initial: &StateId) {
        tracing::debug!(state = %initial, "automaton reset to initial state");
    }

    fn transitioned(&self, record: &TransitionRecord<Y>) {
        tracing::debug!(
            from = %record.from,
            symbol = %record.symbol,
            to = %record.to,
            "transition"
        );
    }

    fn rejected(&self, rejection: &Rejection<Y>) {
        tracing::warn!(
            state = %rejection.state,
            symbol = %rejection.symbol,
            valid_inputs = ?rejection.valid_inputs,
            "{}",
            rejection
        );
    }

    fn evaluated(&self, evaluation: &Evaluation<Y>) {
        tracing::debug!(
            accepted = evaluation.accepted,
            final_state = %evaluation.final_state,
            consumed = evaluation.consumed,
            "evaluation finished"
        );
    }

    fn validated(&self, issues: &[ValidationIssue]) {
        if issues.is_empty() {
            tracing::info!("automaton validation passed");
        }
        for issue in issues {
            tracing::error!(%issue, "automaton validation failed");
        }
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<Y: Symbol> Observer<Y> for NoopObserver {}
