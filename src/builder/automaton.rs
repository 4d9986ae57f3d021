//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{State, StateId, Symbol};
use crate::machine::{Automaton, Observer};
use crate::validation::collect_issues;
use indexmap::IndexMap;
use std::sync::Arc;

/// Builder for constructing automata with a fluent API.
///
/// Unlike assembling an [`Automaton`] by hand, `build` is strict: it only
/// returns automata with an initial state and no dangling transitions.
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::AutomatonBuilder;
///
/// let mut dfa = AutomatonBuilder::new()
///     .state("START")
///     .state("ZERO")
///     .accepting_state("ACCEPT")
///     .transition("START", '0', "ZERO")
///     .transition("START", '1', "START")
///     .transition("ZERO", '0', "ZERO")
///     .transition("ZERO", '1', "ACCEPT")
///     .transition("ACCEPT", '0', "ZERO")
///     .transition("ACCEPT", '1', "START")
///     .initial("START")
///     .build()
///     .unwrap();
///
/// assert!(dfa.accepts("1101").unwrap());
/// assert!(!dfa.accepts("10").unwrap());
/// ```
pub struct AutomatonBuilder<Y: Symbol = char> {
    states: IndexMap<StateId, State<Y>>,
    edges: Vec<(StateId, Y, StateId)>,
    initial: Option<StateId>,
    observer: Option<Arc<dyn Observer<Y>>>,
}

impl<Y: Symbol> AutomatonBuilder<Y> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: IndexMap::new(),
            edges: Vec::new(),
            initial: None,
            observer: None,
        }
    }

    /// Declare a non-accepting state.
    pub fn state(self, name: impl Into<StateId>) -> Self {
        self.declare(name.into(), false)
    }

    /// Declare an accepting state.
    pub fn accepting_state(self, name: impl Into<StateId>) -> Self {
        self.declare(name.into(), true)
    }

    /// Declare a pre-built state, keeping its transitions.
    pub fn with_state(mut self, state: State<Y>) -> Self {
        self.states.insert(state.id().clone(), state);
        self
    }

    // Redeclaring keeps the state's position and transitions but takes the new flag.
    fn declare(mut self, id: StateId, accepting: bool) -> Self {
        let mut state = State::with_acceptance(id.clone(), accepting);
        if let Some(existing) = self.states.get(&id) {
            for (symbol, target) in existing.transitions() {
                state.add_transition(symbol.clone(), target);
            }
        }
        self.states.insert(id, state);
        self
    }

    /// Add a transition. A later transition on the same `(from, symbol)`
    /// overwrites an earlier one.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        symbol: Y,
        to: impl Into<StateId>,
    ) -> Self {
        self.edges.push((from.into(), symbol, to.into()));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<StateId>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Report through `observer` instead of the default tracing observer.
    pub fn observer(mut self, observer: Arc<dyn Observer<Y>>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the automaton.
    /// Returns an error if the result would not be fully wired.
    pub fn build(self) -> Result<Automaton<Y>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut states = self.states;
        for (from, symbol, to) in self.edges {
            let state = states
                .get_mut(&from)
                .ok_or_else(|| BuildError::UnknownSourceState {
                    name: from.to_string(),
                })?;
            state.add_transition(symbol, to);
        }

        let mut automaton = match self.observer {
            Some(observer) => Automaton::with_observer(observer),
            None => Automaton::new(),
        };
        for state in states.into_values() {
            automaton.add_state(state);
        }
        automaton.set_initial_state(initial.as_str())?;

        let report = automaton.diagnose();
        if report.is_failure() {
            return Err(BuildError::Invalid {
                issues: collect_issues(&report),
            });
        }

        Ok(automaton)
    }
}

impl<Y: Symbol> Default for AutomatonBuilder<Y> {
    fn default() -> Self {
        Self::new()
    }
}
