//! Undo/redo history of visited states.
//!
//! Both stacks are plain vectors that are pushed and popped in place. Every
//! operation checks whether it can proceed before touching anything, so a
//! declined undo or redo leaves the history exactly as it was.

use super::id::StateId;
use serde::{Deserialize, Serialize};
use std::mem;

/// Direction of the most recent history-affecting move.
///
/// This flag, not the emptiness of the undo stack, decides whether redo is
/// allowed: any forward move discards the undone branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Construction, `change_state` or `trigger`. Redo is disabled.
    #[default]
    Forward,
    /// An `undo` happened since the last forward move. Redo is enabled.
    Backward,
}

/// Two stacks of state ids plus the redo flag.
///
/// # Example
///
/// ```rust
/// use retrace::core::{History, StateId};
///
/// let mut history = History::new();
/// let mut current = StateId::from("B");
///
/// // A -> B
/// history.record(StateId::from("A"));
/// assert!(history.can_undo());
///
/// // back to A
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "A");
/// assert!(history.can_redo());
///
/// // forward again to B
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "B");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    past: Vec<StateId>,
    undone: Vec<StateId>,
    direction: Direction,
}

impl History {
    /// Create an empty history with redo disabled.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            undone: Vec::new(),
            direction: Direction::Forward,
        }
    }

    /// Record a forward move away from `from`.
    ///
    /// The undone stack is kept but becomes unreachable until the next undo.
    pub fn record(&mut self, from: StateId) {
        self.past.push(from);
        self.direction = Direction::Forward;
    }

    /// Step back, replacing `current` with the previous state.
    ///
    /// Returns `false` and changes nothing when there is nothing to undo.
    pub fn undo(&mut self, current: &mut StateId) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.undone.push(mem::replace(current, previous));
        self.direction = Direction::Backward;
        true
    }

    /// Re-apply the most recently undone state into `current`.
    ///
    /// The redone state itself is pushed onto the undo stack. Returns `false`
    /// and changes nothing when redo is not currently allowed.
    pub fn redo(&mut self, current: &mut StateId) -> bool {
        if self.direction != Direction::Backward {
            return false;
        }
        let Some(next) = self.undone.pop() else {
            return false;
        };
        self.past.push(next.clone());
        *current = next;
        true
    }

    /// Drop both stacks. The redo flag is kept.
    pub fn clear(&mut self) {
        self.past.clear();
        self.undone.clear();
    }

    /// Check if undo would succeed (pure)
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo would succeed (pure)
    pub fn can_redo(&self) -> bool {
        self.direction == Direction::Backward && !self.undone.is_empty()
    }

    /// Previously visited states, oldest first.
    pub fn past(&self) -> &[StateId] {
        &self.past
    }

    /// Undone states, oldest first; the last entry is redone next.
    pub fn undone(&self) -> &[StateId] {
        &self.undone
    }

    /// Get the redo flag (pure)
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Every id referenced by either stack.
    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.past.iter().chain(self.undone.iter())
    }
}
