//! Automaton states and the handles that link them.
//!
//! States never own each other. A transition stores the [`StateId`] of its
//! target, and the owning automaton resolves that handle against its own
//! state table. Cycles, self-loops and back-edges are therefore plain data.

use super::symbol::Symbol;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable handle naming a state within one automaton.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::StateId;
///
/// let id = StateId::from("START");
/// assert_eq!(id.as_str(), "START");
/// assert_eq!(id.to_string(), "START");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a handle from a state name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the state name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for StateId {
    fn from(name: &String) -> Self {
        Self(name.clone())
    }
}

impl From<&StateId> for StateId {
    fn from(id: &StateId) -> Self {
        id.clone()
    }
}

impl<Y: Symbol> From<&State<Y>> for StateId {
    fn from(state: &State<Y>) -> Self {
        state.id.clone()
    }
}

/// A named automaton node with its outgoing transitions.
///
/// Each symbol maps to at most one successor. The acceptance flag is fixed
/// at construction.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
///
/// let mut start: State = State::new("START");
/// let zero: State = State::new("ZERO");
///
/// start.add_transition('0', &zero);
/// start.add_transition('1', "START");
///
/// assert_eq!(start.next_state(&'0').map(|id| id.as_str()), Some("ZERO"));
/// assert_eq!(start.next_state(&'1').map(|id| id.as_str()), Some("START"));
/// assert!(start.next_state(&'2').is_none());
/// assert_eq!(start.valid_inputs(), vec!['0', '1']);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct State<Y: Symbol = char> {
    id: StateId,
    accepting: bool,
    transitions: IndexMap<Y, StateId>,
}

impl<Y: Symbol> State<Y> {
    /// Create a non-accepting state.
    pub fn new(name: impl Into<StateId>) -> Self {
        Self::with_acceptance(name, false)
    }

    /// Create an accepting state.
    pub fn accepting(name: impl Into<StateId>) -> Self {
        Self::with_acceptance(name, true)
    }

    /// Create a state with an explicit acceptance flag.
    pub fn with_acceptance(name: impl Into<StateId>, accepting: bool) -> Self {
        Self {
            id: name.into(),
            accepting,
            transitions: IndexMap::new(),
        }
    }

    /// Returns the handle naming this state.
    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// Returns the state name.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Check if a run ending here is accepted.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Map `symbol` to `target`.
    ///
    /// An existing mapping for `symbol` is overwritten and its previous
    /// target returned. The symbol keeps its original position in
    /// [`valid_inputs`](Self::valid_inputs).
    pub fn add_transition(&mut self, symbol: Y, target: impl Into<StateId>) -> Option<StateId> {
        self.transitions.insert(symbol, target.into())
    }

    /// Returns the successor for `symbol`, or `None` when it is unmapped.
    pub fn next_state(&self, symbol: &Y) -> Option<&StateId> {
        self.transitions.get(symbol)
    }

    /// Returns every symbol with a defined transition, in insertion order.
    pub fn valid_inputs(&self) -> Vec<Y> {
        self.transitions.keys().cloned().collect()
    }

    /// Iterate over `(symbol, target)` pairs in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (&Y, &StateId)> {
        self.transitions.iter()
    }

    /// Number of outgoing transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl<Y: Symbol> fmt::Display for State<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State({}, accepting={})", self.id, self.accepting)
    }
}
