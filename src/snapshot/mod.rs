//! Value snapshots of a running machine.
//!
//! A snapshot is the mutable half of an [`Fsm`](crate::Fsm): the current
//! state plus its undo/redo history. The table and initial state are not
//! included, so a snapshot can only be restored into a machine built from
//! a compatible configuration.

use crate::core::{History, StateId};
use serde::{Deserialize, Serialize};
use std::mem;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the encoded snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Current state and history of a machine at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Encoded format version, always the first field
    pub version: u32,

    /// Active state
    pub current: StateId,

    /// Undo/redo stacks and redo flag
    pub history: History,
}

impl Snapshot {
    /// Snapshot of a freshly started machine.
    pub fn start(initial: StateId) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            current: initial,
            history: History::new(),
        }
    }

    /// Move to `target`, recording the current state for undo.
    pub fn advance(&mut self, target: StateId) {
        let from = mem::replace(&mut self.current, target);
        self.history.record(from);
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.current)
    }

    /// Re-apply the last undone state. Returns `false` if redo is not allowed.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.current)
    }

    /// Jump to `state` and drop both history stacks.
    pub fn reset_to(&mut self, state: StateId) {
        self.current = state;
        self.history.clear();
    }

    /// Drop both history stacks, keeping the current state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Every state id the snapshot refers to.
    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        std::iter::once(&self.current).chain(self.history.states())
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    /// Encode as indented JSON for human inspection.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    /// Decode JSON, rejecting snapshots of another format version.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| SnapshotError::Deserialization(e.to_string()))?;
        let found = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| SnapshotError::Deserialization("missing version".to_string()))?;
        check_version(u32::try_from(found).unwrap_or(u32::MAX))?;
        serde_json::from_value(value).map_err(|e| SnapshotError::Deserialization(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    /// Decode the binary encoding, rejecting snapshots of another format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        // the version leads the encoding, so it can be read before the layout is trusted
        let found: u32 = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::Deserialization(e.to_string()))?;
        check_version(found)?;
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Deserialization(e.to_string()))
    }
}

fn check_version(found: u32) -> Result<(), SnapshotError> {
    if found == SNAPSHOT_VERSION {
        Ok(())
    } else {
        Err(SnapshotError::UnsupportedVersion {
            found,
            supported: SNAPSHOT_VERSION,
        })
    }
}
