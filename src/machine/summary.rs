//! Read-only structural description of an automaton.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One edge of the transition graph, with the symbol rendered as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: StateId,
    pub symbol: String,
    pub to: StateId,
}

/// Snapshot of an automaton's structure for presentation layers.
///
/// Produced by `Automaton::summary`. Rendering with `Display` gives a
/// plain listing of the states and edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub states: Vec<StateId>,
    pub initial_state: Option<StateId>,
    pub accepting_states: Vec<StateId>,
    pub current_state: Option<StateId>,
    pub edges: Vec<Edge>,
}

fn join(ids: &[StateId]) -> String {
    ids.iter().map(StateId::as_str).collect::<Vec<_>>().join(", ")
}

fn or_none(id: Option<&StateId>) -> &str {
    id.map(StateId::as_str).unwrap_or("none")
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States: [{}]", join(&self.states))?;
        writeln!(f, "Initial state: {}", or_none(self.initial_state.as_ref()))?;
        writeln!(f, "Accepting states: [{}]", join(&self.accepting_states))?;
        writeln!(f, "Current state: {}", or_none(self.current_state.as_ref()))?;
        write!(f, "Transitions:")?;
        for edge in &self.edges {
            write!(f, "\n  {} --{}--> {}", edge.from, edge.symbol, edge.to)?;
        }
        Ok(())
    }
}
