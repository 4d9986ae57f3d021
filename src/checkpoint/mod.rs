//! Checkpoint and restore for automata.
//!
//! A checkpoint captures the full transition graph together with the
//! current cursor and history, so a run can be paused and resumed in
//! another process. Observers are not captured; a restored automaton
//! reports through the default tracing observer.

use crate::core::{State, StateId, Symbol, TransitionHistory};
use crate::machine::Automaton;
use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{CheckpointError, Cursor};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of an automaton.
///
/// # Example
///
/// ```rust
/// use dfa_engine::automaton;
/// use dfa_engine::checkpoint::Checkpoint;
/// use dfa_engine::Automaton;
///
/// let mut dfa = automaton! {
///     initial: EVEN_A,
///     accepting: [EVEN_A],
///     EVEN_A => { 'a' => ODD_A, 'b' => EVEN_A },
///     ODD_A => { 'a' => EVEN_A, 'b' => ODD_A },
/// }
/// .unwrap();
/// dfa.accepts("ab").unwrap();
///
/// let json = dfa.checkpoint().to_json().unwrap();
/// let checkpoint = Checkpoint::<char>::from_json(&json).unwrap();
/// let restored = Automaton::from_checkpoint(checkpoint).unwrap();
///
/// assert_eq!(restored.current_state_name(), Some("ODD_A"));
/// assert_eq!(restored.history().len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<Y: Symbol> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Every registered state with its transitions, in registration order
    pub states: Vec<State<Y>>,

    pub initial_state: Option<StateId>,

    pub current_state: Option<StateId>,

    /// Transitions recorded since the last reset
    pub history: TransitionHistory<Y>,
}

impl<Y: Symbol> Checkpoint<Y> {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to a compact binary encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary encoding.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    fn check(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let mut known = IndexSet::with_capacity(self.states.len());
        for state in &self.states {
            if !known.insert(state.id()) {
                return Err(CheckpointError::DuplicateState {
                    name: state.id().clone(),
                });
            }
        }

        let cursors = [
            (Cursor::Initial, &self.initial_state),
            (Cursor::Current, &self.current_state),
        ];
        for (cursor, id) in cursors {
            if let Some(state) = id.as_ref().filter(|&id| !known.contains(id)) {
                return Err(CheckpointError::UnknownCursor {
                    cursor,
                    state: state.clone(),
                });
            }
        }
        if self.current_state.is_some() != self.initial_state.is_some() {
            return Err(CheckpointError::PartialCursor);
        }

        for (position, record) in self.history.iter().enumerate() {
            for id in [&record.from, &record.to] {
                if !known.contains(id) {
                    return Err(CheckpointError::UnknownHistoryState {
                        position,
                        state: id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<Y: Symbol> Automaton<Y> {
    /// Capture the automaton's graph, cursor and history.
    pub fn checkpoint(&self) -> Checkpoint<Y> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            states: self.states().cloned().collect(),
            initial_state: self.initial_state_name().map(StateId::from),
            current_state: self.current_state_name().map(StateId::from),
            history: self.history().clone(),
        }
    }

    /// Restore an automaton from a checkpoint.
    ///
    /// State names must be unique, and every cursor and history record must
    /// name a checkpointed state. The accepting set is recomputed from the
    /// restored state flags.
    pub fn from_checkpoint(checkpoint: Checkpoint<Y>) -> Result<Self, CheckpointError> {
        checkpoint.check()?;
        tracing::debug!(
            id = %checkpoint.id,
            states = checkpoint.states.len(),
            "restoring automaton from checkpoint"
        );
        Ok(Automaton::from_parts(
            checkpoint.states,
            checkpoint.initial_state,
            checkpoint.current_state,
            checkpoint.history,
        ))
    }
}
