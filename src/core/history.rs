//! Transition history tracking.
//!
//! Records every successful transition since the last reset, in order.

use super::state::StateId;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single successful transition.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{StateId, TransitionRecord};
///
/// let record = TransitionRecord::new("START", '0', "ZERO");
/// assert_eq!(record.from, StateId::from("START"));
/// assert_eq!(record.to_string(), "START --0--> ZERO");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<Y: Symbol = char> {
    /// The state being left
    pub from: StateId,
    /// The symbol consumed
    pub symbol: Y,
    /// The state entered
    pub to: StateId,
}

impl<Y: Symbol> TransitionRecord<Y> {
    pub fn new(from: impl Into<StateId>, symbol: Y, to: impl Into<StateId>) -> Self {
        Self {
            from: from.into(),
            symbol,
            to: to.into(),
        }
    }
}

impl<Y: Symbol> fmt::Display for TransitionRecord<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.symbol, self.to)
    }
}

/// Ordered history of transitions.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{TransitionHistory, TransitionRecord};
///
/// let mut history = TransitionHistory::new();
/// history.record(TransitionRecord::new("START", '0', "ZERO"));
/// history.record(TransitionRecord::new("ZERO", '1', "ACCEPT"));
///
/// let path: Vec<&str> = history.path().iter().map(|id| id.as_str()).collect();
/// assert_eq!(path, vec!["START", "ZERO", "ACCEPT"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<Y: Symbol = char> {
    records: Vec<TransitionRecord<Y>>,
}

impl<Y: Symbol> Default for TransitionHistory<Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Y: Symbol> TransitionHistory<Y> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, record: TransitionRecord<Y>) {
        self.records.push(record);
    }

    /// Drop every recorded transition.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first record followed by the `to`
    /// state of each record. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Get the symbols consumed, in order.
    pub fn symbols(&self) -> Vec<&Y> {
        self.records.iter().map(|r| &r.symbol).collect()
    }

    /// Get all records in order.
    pub fn records(&self) -> &[TransitionRecord<Y>] {
        &self.records
    }

    /// Copy the records into an owned vector.
    pub fn to_vec(&self) -> Vec<TransitionRecord<Y>> {
        self.records.clone()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transition has been recorded since the last reset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, TransitionRecord<Y>> {
        self.records.iter()
    }
}

impl<'a, Y: Symbol> IntoIterator for &'a TransitionHistory<Y> {
    type Item = &'a TransitionRecord<Y>;
    type IntoIter = std::slice::Iter<'a, TransitionRecord<Y>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
