//! Errors raised while saving or restoring an automaton checkpoint.

use crate::core::StateId;
use std::fmt;
use thiserror::Error;

/// Which cursor of the automaton a checkpoint field describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Initial,
    Current,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Current => f.write_str("current"),
        }
    }
}

/// Errors that can occur while saving or restoring a checkpoint
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("Failed to encode automaton checkpoint: {0}")]
    SerializationFailed(String),

    #[error("Failed to decode automaton checkpoint: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Two checkpointed states share a name
    #[error("State '{name}' appears more than once in the checkpoint")]
    DuplicateState { name: StateId },

    /// A cursor names a state the checkpoint does not contain
    #[error("The {cursor} state '{state}' is not among the checkpointed states")]
    UnknownCursor { cursor: Cursor, state: StateId },

    /// Exactly one of the initial and current cursors is set
    #[error("The initial and current states must be set together")]
    PartialCursor,

    /// A history record refers to a state the checkpoint does not contain
    #[error("History record {position} refers to unknown state '{state}'")]
    UnknownHistoryState { position: usize, state: StateId },
}
