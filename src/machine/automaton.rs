//! Deterministic finite automaton runtime.

use crate::core::{State, StateId, Symbol, TransitionHistory, TransitionRecord};
use crate::machine::error::AutomatonError;
use crate::machine::observer::{Observer, TracingObserver};
use crate::machine::outcome::{Evaluation, Rejection, RejectionReason, StepOutcome};
use crate::machine::summary::{Edge, Summary};
use crate::validation::{check_automaton, collect_issues, ValidationReport};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::Arc;

/// Deterministic finite automaton over symbols of type `Y`.
///
/// Owns its states, tracks the current state, and records every successful
/// transition since the last reset.
///
/// Lifecycle: an automaton without an initial state is unconfigured and
/// refuses to `step` or `reset`. Setting an initial state makes it ready;
/// stepping runs it; `reset` makes it ready again.
///
/// The automaton is not synchronized. Drive one instance from one caller at
/// a time.
///
/// # Example
///
/// ```rust
/// use dfa_engine::{Automaton, State};
///
/// let mut even: State = State::accepting("EVEN_A");
/// let mut odd: State = State::new("ODD_A");
/// even.add_transition('a', &odd);
/// even.add_transition('b', "EVEN_A");
/// odd.add_transition('a', &even);
/// odd.add_transition('b', "ODD_A");
///
/// let mut dfa: Automaton = Automaton::new();
/// dfa.add_state(even);
/// dfa.add_state(odd);
/// dfa.set_initial_state("EVEN_A").unwrap();
///
/// assert!(dfa.evaluate("aa".chars()).unwrap());
/// assert!(!dfa.evaluate("aaa".chars()).unwrap());
/// assert!(dfa.accepts("").unwrap());
/// ```
#[derive(Clone)]
pub struct Automaton<Y: Symbol = char> {
    states: IndexMap<StateId, State<Y>>,
    initial: Option<StateId>,
    current: Option<StateId>,
    accepting: IndexSet<StateId>,
    history: TransitionHistory<Y>,
    observer: Arc<dyn Observer<Y>>,
}

impl<Y: Symbol> Default for Automaton<Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Y: Symbol> Automaton<Y> {
    /// Create an empty automaton reporting through [`TracingObserver`].
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    /// Create an empty automaton reporting through `observer`.
    pub fn with_observer(observer: Arc<dyn Observer<Y>>) -> Self {
        Self {
            states: IndexMap::new(),
            initial: None,
            current: None,
            accepting: IndexSet::new(),
            history: TransitionHistory::new(),
            observer,
        }
    }

    /// Replace the observer.
    pub fn set_observer(&mut self, observer: Arc<dyn Observer<Y>>) {
        self.observer = observer;
    }

    /// Register a state under its name.
    ///
    /// A state already registered under that name is replaced and returned.
    /// The accepting set follows the flag of the newly added state.
    pub fn add_state(&mut self, state: State<Y>) -> Option<State<Y>> {
        let id = state.id().clone();
        if state.is_accepting() {
            self.accepting.insert(id.clone());
        } else {
            self.accepting.shift_remove(&id);
        }

        let replaced = self.states.insert(id.clone(), state);
        if let Some(state) = self.states.get(&id) {
            self.observer.state_added(state, replaced.is_some());
        }
        replaced
    }

    /// Designate the start state and move the cursor there.
    ///
    /// Fails with [`AutomatonError::UnknownState`] if `name` is not
    /// registered, leaving the previous configuration untouched.
    pub fn set_initial_state(&mut self, name: &str) -> Result<(), AutomatonError> {
        let id = self
            .states
            .get(name)
            .map(|state| state.id().clone())
            .ok_or_else(|| AutomatonError::UnknownState {
                name: name.to_string(),
            })?;

        self.initial = Some(id.clone());
        self.current = Some(id.clone());
        self.observer.initial_state_set(&id);
        Ok(())
    }

    /// Return to the initial state and clear the history.
    pub fn reset(&mut self) -> Result<(), AutomatonError> {
        let initial = self.initial.clone().ok_or(AutomatonError::NotConfigured)?;
        self.current = Some(initial.clone());
        self.history.clear();
        self.observer.reset(&initial);
        Ok(())
    }

    /// Consume one symbol.
    ///
    /// Returns `Ok(true)` after moving to the successor, `Ok(false)` when
    /// the symbol cannot be consumed from the current state. A rejected
    /// symbol leaves the cursor and history unchanged.
    pub fn step(&mut self, symbol: Y) -> Result<bool, AutomatonError> {
        Ok(matches!(self.advance(symbol)?, StepOutcome::Transitioned))
    }

    fn advance(&mut self, symbol: Y) -> Result<StepOutcome<Y>, AutomatonError> {
        let current = self.current_state().ok_or(AutomatonError::NotConfigured)?;

        let reason = match current.next_state(&symbol) {
            Some(target) if self.states.contains_key(target) => {
                let record = TransitionRecord::new(current.id(), symbol, target);
                self.current = Some(record.to.clone());
                self.observer.transitioned(&record);
                self.history.record(record);
                return Ok(StepOutcome::Transitioned);
            }
            Some(target) => RejectionReason::UnregisteredTarget(target.clone()),
            None => RejectionReason::NoTransition,
        };

        let rejection = Rejection {
            state: current.id().clone(),
            valid_inputs: current.valid_inputs(),
            symbol,
            reason,
        };
        self.observer.rejected(&rejection);
        Ok(StepOutcome::Rejected(rejection))
    }

    /// Evaluate a whole input sequence from the initial state.
    ///
    /// Returns `Ok(true)` iff every symbol is consumed and the automaton
    /// ends in an accepting state. Evaluation stops at the first symbol
    /// that cannot be consumed; later symbols are never read.
    pub fn evaluate<I>(&mut self, input: I) -> Result<bool, AutomatonError>
    where
        I: IntoIterator<Item = Y>,
    {
        self.run(input).map(|evaluation| evaluation.accepted)
    }

    /// Evaluate a whole input sequence, reporting where it stopped.
    pub fn run<I>(&mut self, input: I) -> Result<Evaluation<Y>, AutomatonError>
    where
        I: IntoIterator<Item = Y>,
    {
        self.reset()?;

        let mut consumed = 0;
        let mut rejection = None;
        for symbol in input {
            match self.advance(symbol)? {
                StepOutcome::Transitioned => consumed += 1,
                StepOutcome::Rejected(refused) => {
                    rejection = Some(refused);
                    break;
                }
            }
        }

        let final_state = self.current.clone().ok_or(AutomatonError::NotConfigured)?;
        let evaluation = Evaluation {
            accepted: rejection.is_none() && self.accepting.contains(&final_state),
            final_state,
            consumed,
            rejection,
        };
        self.observer.evaluated(&evaluation);
        Ok(evaluation)
    }

    /// Name of the state the automaton occupies.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.as_ref().map(StateId::as_str)
    }

    /// The state the automaton occupies.
    pub fn current_state(&self) -> Option<&State<Y>> {
        self.current.as_ref().and_then(|id| self.states.get(id))
    }

    /// Check if the automaton occupies an accepting state.
    pub fn is_accepting(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|id| self.accepting.contains(id))
    }

    /// Transitions recorded since the last reset.
    pub fn history(&self) -> &TransitionHistory<Y> {
        &self.history
    }

    /// Run every structural check, accumulating ALL issues.
    pub fn diagnose(&self) -> ValidationReport {
        check_automaton(self)
    }

    /// Check the structure, notifying the observer of any issues.
    ///
    /// Advisory only: nothing requires validation before running.
    pub fn validate(&self) -> bool {
        let report = self.diagnose();
        self.observer.validated(&collect_issues(&report));
        report.is_success()
    }

    /// Name of the start state, if one has been set.
    pub fn initial_state_name(&self) -> Option<&str> {
        self.initial.as_ref().map(StateId::as_str)
    }

    /// Look up a registered state by name.
    pub fn state(&self, name: &str) -> Option<&State<Y>> {
        self.states.get(name)
    }

    /// Whether a state with this name is registered.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Registered states in registration order.
    pub fn states(&self) -> impl Iterator<Item = &State<Y>> {
        self.states.values()
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Names of accepting states in registration order.
    pub fn accepting_state_names(&self) -> impl Iterator<Item = &str> {
        self.accepting.iter().map(StateId::as_str)
    }

    /// Every symbol used by any transition, in first-seen order.
    pub fn alphabet(&self) -> Vec<Y> {
        let mut alphabet = IndexSet::new();
        for state in self.states.values() {
            for (symbol, _) in state.transitions() {
                alphabet.insert(symbol.clone());
            }
        }
        alphabet.into_iter().collect()
    }

    /// Every edge as a `(from, symbol, to)` record.
    pub fn transitions(&self) -> Vec<TransitionRecord<Y>> {
        self.states
            .values()
            .flat_map(|state| {
                state
                    .transitions()
                    .map(move |(symbol, to)| TransitionRecord::new(state.id(), symbol.clone(), to))
            })
            .collect()
    }

    /// Describe the automaton's structure for display.
    pub fn summary(&self) -> Summary {
        Summary {
            states: self.states.keys().cloned().collect(),
            initial_state: self.initial.clone(),
            accepting_states: self.accepting.iter().cloned().collect(),
            current_state: self.current.clone(),
            edges: self
                .transitions()
                .into_iter()
                .map(|record| Edge {
                    from: record.from,
                    symbol: record.symbol.to_string(),
                    to: record.to,
                })
                .collect(),
        }
    }

    /// Rebuild an automaton from parts that have already been checked.
    pub(crate) fn from_parts(
        states: Vec<State<Y>>,
        initial: Option<StateId>,
        current: Option<StateId>,
        history: TransitionHistory<Y>,
    ) -> Self {
        let mut automaton = Self::new();
        for state in states {
            let id = state.id().clone();
            if state.is_accepting() {
                automaton.accepting.insert(id.clone());
            } else {
                automaton.accepting.shift_remove(&id);
            }
            automaton.states.insert(id, state);
        }
        automaton.initial = initial;
        automaton.current = current;
        automaton.history = history;
        automaton
    }
}

impl Automaton<char> {
    /// Evaluate the characters of `input`.
    pub fn accepts(&mut self, input: &str) -> Result<bool, AutomatonError> {
        self.evaluate(input.chars())
    }
}

impl<Y: Symbol> fmt::Debug for Automaton<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("states", &self.states)
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("accepting", &self.accepting)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::observer::NoopObserver;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        fn push(&self, event: String) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().map(|e| e.clone()).unwrap_or_default()
        }
    }

    impl Observer<char> for RecordingObserver {
        fn state_added(&self, state: &State<char>, replaced: bool) {
            self.push(format!("added {} replaced={}", state.id(), replaced));
        }

        fn initial_state_set(&self, initial: &StateId) {
            self.push(format!("initial {}", initial));
        }

        fn reset(&self, initial: &StateId) {
            self.push(format!("reset {}", initial));
        }

        fn transitioned(&self, record: &TransitionRecord<char>) {
            self.push(format!("transition {}", record));
        }

        fn rejected(&self, rejection: &Rejection<char>) {
            self.push(format!("rejected {} at {}", rejection.symbol, rejection.state));
        }

        fn evaluated(&self, evaluation: &Evaluation<char>) {
            self.push(format!("evaluated accepted={}", evaluation.accepted));
        }

        fn validated(&self, issues: &[crate::validation::ValidationIssue]) {
            self.push(format!("validated issues={}", issues.len()));
        }
    }

    /// S1 --a--> S2 (accepting), S2 --b--> S1
    fn two_state() -> Automaton {
        let mut s1: State = State::new("S1");
        let mut s2: State = State::accepting("S2");
        s1.add_transition('a', &s2);
        s2.add_transition('b', &s1);

        let mut automaton: Automaton = Automaton::with_observer(Arc::new(NoopObserver));
        automaton.add_state(s1);
        automaton.add_state(s2);
        automaton
    }

    #[test]
    fn add_state_registers_and_tracks_acceptance() {
        let automaton = two_state();

        assert!(automaton.contains_state("S1"));
        assert!(automaton.contains_state("S2"));
        assert_eq!(automaton.accepting_state_names().collect::<Vec<_>>(), vec!["S2"]);
        assert_eq!(automaton.state_count(), 2);
    }

    #[test]
    fn re_adding_a_name_replaces_state_and_acceptance() {
        let mut automaton = two_state();

        let replaced = automaton.add_state(State::new("S2"));

        assert!(replaced.is_some_and(|s| s.is_accepting()));
        assert_eq!(automaton.state_count(), 2);
        assert_eq!(automaton.accepting_state_names().count(), 0);
        assert_eq!(automaton.state("S2").map(State::transition_count), Some(0));

        automaton.add_state(State::accepting("S1"));
        assert_eq!(automaton.accepting_state_names().collect::<Vec<_>>(), vec!["S1"]);
    }

    #[test]
    fn set_initial_state_positions_cursor() {
        let mut automaton = two_state();

        automaton.set_initial_state("S1").unwrap();

        assert_eq!(automaton.initial_state_name(), Some("S1"));
        assert_eq!(automaton.current_state_name(), Some("S1"));
    }

    #[test]
    fn unknown_initial_state_leaves_configuration_untouched() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();
        automaton.step('a').unwrap();

        let result = automaton.set_initial_state("nope");

        assert_eq!(
            result,
            Err(AutomatonError::UnknownState {
                name: "nope".to_string()
            })
        );
        assert_eq!(automaton.initial_state_name(), Some("S1"));
        assert_eq!(automaton.current_state_name(), Some("S2"));
        assert_eq!(automaton.history().len(), 1);
    }

    #[test]
    fn unconfigured_automaton_refuses_to_run() {
        let mut automaton = two_state();

        assert_eq!(automaton.reset(), Err(AutomatonError::NotConfigured));
        assert_eq!(automaton.step('a'), Err(AutomatonError::NotConfigured));
        assert_eq!(
            automaton.evaluate("a".chars()),
            Err(AutomatonError::NotConfigured)
        );
        assert_eq!(automaton.current_state_name(), None);
        assert!(!automaton.is_accepting());
    }

    #[test]
    fn step_moves_and_records_history() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();

        assert_eq!(automaton.step('a'), Ok(true));

        assert_eq!(automaton.current_state_name(), Some("S2"));
        assert!(automaton.is_accepting());
        assert_eq!(
            automaton.history().records(),
            &[TransitionRecord::new("S1", 'a', "S2")]
        );
    }

    #[test]
    fn rejected_step_changes_nothing() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();
        automaton.step('a').unwrap();

        assert_eq!(automaton.step('a'), Ok(false));

        assert_eq!(automaton.current_state_name(), Some("S2"));
        assert_eq!(automaton.history().len(), 1);
    }

    #[test]
    fn step_into_unregistered_state_is_rejected() {
        let mut s1: State = State::new("S1");
        s1.add_transition('x', "GHOST");
        let mut automaton: Automaton = Automaton::with_observer(Arc::new(NoopObserver));
        automaton.add_state(s1);
        automaton.set_initial_state("S1").unwrap();

        let evaluation = automaton.run("x".chars()).unwrap();

        assert!(!evaluation.accepted);
        assert_eq!(automaton.current_state_name(), Some("S1"));
        assert_eq!(
            evaluation.rejection.map(|r| r.reason),
            Some(RejectionReason::UnregisteredTarget(StateId::from("GHOST")))
        );
    }

    #[test]
    fn reset_restores_initial_state_and_clears_history() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();
        automaton.step('a').unwrap();

        automaton.reset().unwrap();
        assert_eq!(automaton.current_state_name(), Some("S1"));
        assert!(automaton.history().is_empty());

        automaton.reset().unwrap();
        assert_eq!(automaton.current_state_name(), Some("S1"));
        assert!(automaton.history().is_empty());
    }

    #[test]
    fn evaluate_accepts_and_rejects() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();

        assert_eq!(automaton.accepts("a"), Ok(true));
        assert_eq!(automaton.accepts("aba"), Ok(true));
        assert_eq!(automaton.accepts("ab"), Ok(false));
        assert_eq!(automaton.accepts(""), Ok(false));
    }

    #[test]
    fn evaluate_stops_at_first_rejection() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();

        let evaluation = automaton.run("abbab".chars()).unwrap();

        assert!(!evaluation.accepted);
        assert_eq!(evaluation.consumed, 2);
        assert_eq!(evaluation.rejected_at(), Some(2));
        assert_eq!(evaluation.final_state, StateId::from("S1"));
        assert_eq!(automaton.history().len(), 2);
        let rejection = evaluation.rejection.unwrap();
        assert_eq!(rejection.symbol, 'b');
        assert_eq!(rejection.valid_inputs, vec!['a']);
        assert_eq!(rejection.reason, RejectionReason::NoTransition);
    }

    #[test]
    fn evaluate_resets_before_running() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();
        automaton.step('a').unwrap();

        assert_eq!(automaton.accepts("a"), Ok(true));
        assert_eq!(automaton.history().len(), 1);
    }

    #[test]
    fn validate_reflects_structure() {
        let mut automaton = two_state();
        assert!(!automaton.validate());

        automaton.set_initial_state("S1").unwrap();
        assert!(automaton.validate());

        let mut dangling: State = State::new("S3");
        dangling.add_transition('z', "MISSING");
        automaton.add_state(dangling);
        assert!(!automaton.validate());
        assert_eq!(automaton.accepts("a"), Ok(true));
    }

    #[test]
    fn observer_sees_every_event() {
        let observer = Arc::new(RecordingObserver::default());
        let mut automaton: Automaton = Automaton::with_observer(observer.clone());

        let mut q0: State = State::new("Q0");
        q0.add_transition('a', "Q1");
        automaton.add_state(q0);
        automaton.add_state(State::accepting("Q1"));
        automaton.set_initial_state("Q0").unwrap();
        automaton.evaluate("ab".chars()).unwrap();
        automaton.validate();

        assert_eq!(
            observer.events(),
            vec![
                "added Q0 replaced=false",
                "added Q1 replaced=false",
                "initial Q0",
                "reset Q0",
                "transition Q0 --a--> Q1",
                "rejected b at Q1",
                "evaluated accepted=false",
                "validated issues=0",
            ]
        );
    }

    #[test]
    fn introspection_lists_structure() {
        let mut automaton = two_state();
        automaton.set_initial_state("S1").unwrap();

        assert_eq!(automaton.alphabet(), vec!['a', 'b']);
        assert_eq!(
            automaton.transitions(),
            vec![
                TransitionRecord::new("S1", 'a', "S2"),
                TransitionRecord::new("S2", 'b', "S1"),
            ]
        );

        let summary = automaton.summary();
        assert_eq!(summary.states.len(), 2);
        assert_eq!(summary.initial_state, Some(StateId::from("S1")));
        assert_eq!(summary.accepting_states, vec![StateId::from("S2")]);
        assert_eq!(summary.edges.len(), 2);
    }

    #[test]
    fn from_parts_keeps_accepting_set_in_line_with_last_flag() {
        let automaton: Automaton = Automaton::from_parts(
            vec![State::accepting("Q0"), State::new("Q0")],
            Some(StateId::from("Q0")),
            Some(StateId::from("Q0")),
            TransitionHistory::new(),
        );

        assert_eq!(automaton.state_count(), 1);
        assert_eq!(automaton.accepting_state_names().count(), 0);
        assert!(!automaton.is_accepting());
    }
}
