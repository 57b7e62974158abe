//! The finite state machine engine.

use crate::core::{EventId, FsmConfig, History, StateId, TransitionTable};
use crate::error::{ConfigurationError, FsmError, Result};
use crate::snapshot::Snapshot;
use tracing::{debug, trace};

/// Finite state machine with linear undo/redo history.
///
/// The machine owns its configuration and a [`Snapshot`] of the mutable
/// part (current state and history). Each operation runs its checks first
/// and only then mutates the snapshot, so a failed call changes nothing.
///
/// # Example
///
/// ```rust
/// use retrace::{Fsm, FsmBuilder};
///
/// let mut fsm = FsmBuilder::new()
///     .initial("A")
///     .transition("A", "go", "B")
///     .transition("B", "back", "A")
///     .build()
///     .unwrap();
///
/// fsm.trigger("go").unwrap();
/// assert_eq!(fsm.state(), "B");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "A");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: FsmConfig,
    snapshot: Snapshot,
}

impl Fsm {
    /// Create a machine from an optional configuration.
    ///
    /// `None` fails with [`ConfigurationError::Missing`].
    pub fn create(config: Option<FsmConfig>) -> Result<Self> {
        let config = config.ok_or(ConfigurationError::Missing)?;
        Self::new(config)
    }

    /// Create a machine in the configured initial state.
    ///
    /// The initial state and every transition target must be defined in
    /// the table.
    pub fn new(config: FsmConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            initial = %config.initial,
            states = config.states.len(),
            "state machine created"
        );
        let snapshot = Snapshot::start(config.initial.clone());
        Ok(Self { config, snapshot })
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// A literal `null` fails with [`ConfigurationError::Missing`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Option<FsmConfig> = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        Self::create(config)
    }

    /// Create a machine from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: Option<FsmConfig> = serde_json::from_value(value)
            .map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        Self::create(config)
    }

    /// Get the active state (pure)
    pub fn state(&self) -> &StateId {
        &self.snapshot.current
    }

    /// Get the reset target (pure)
    pub fn initial_state(&self) -> &StateId {
        &self.config.initial
    }

    /// Get the configuration the machine was built from (pure)
    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Get the state/transition table (pure)
    pub fn table(&self) -> &TransitionTable {
        &self.config.states
    }

    /// Get undo/redo history (pure)
    pub fn history(&self) -> &History {
        &self.snapshot.history
    }

    /// Move to `target`, recording the current state for undo.
    ///
    /// Disables redo until the next [`undo`](Self::undo).
    pub fn change_state(&mut self, target: &str) -> Result<&StateId> {
        if !self.config.states.contains(target) {
            debug!(current = %self.state(), target, "rejected change to unknown state");
            return Err(FsmError::InvalidState(StateId::from(target)));
        }
        Ok(self.advance(StateId::from(target)))
    }

    /// Fire `event` from the current state.
    ///
    /// Has exactly the effect of [`change_state`](Self::change_state) on
    /// the event's destination.
    pub fn trigger(&mut self, event: &str) -> Result<&StateId> {
        let Some(target) = self.config.states.target(self.state().as_str(), event) else {
            debug!(current = %self.state(), event, "rejected undefined event");
            return Err(FsmError::InvalidTransition {
                state: self.state().clone(),
                event: EventId::from(event),
            });
        };
        let target = target.clone();
        debug!(event, "event triggered");
        Ok(self.advance(target))
    }

    fn advance(&mut self, target: StateId) -> &StateId {
        debug!(from = %self.snapshot.current, to = %target, "state changed");
        self.snapshot.advance(target);
        self.state()
    }

    /// List states in table order.
    ///
    /// With `Some(event)`, only states that have an outgoing transition on
    /// that event are listed. The current state plays no part.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            None => self.config.states.states().collect(),
            Some(event) => self.config.states.states_accepting(event),
        }
    }

    /// Events accepted in the current state, in table order.
    pub fn available_events(&self) -> Vec<&EventId> {
        self.config
            .states
            .get(self.state().as_str())
            .map(|node| node.transitions.keys().collect())
            .unwrap_or_default()
    }

    /// Go back to the previous state.
    ///
    /// Returns `false` without changing anything when the undo stack is
    /// empty.
    pub fn undo(&mut self) -> bool {
        let Some(to) = self.history().past().last() else {
            trace!(current = %self.state(), "nothing to undo");
            return false;
        };
        debug!(from = %self.snapshot.current, %to, "undo");
        self.snapshot.undo()
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns `false` when nothing was undone or a forward move happened
    /// since the last undo.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            trace!(
                current = %self.state(),
                direction = ?self.history().direction(),
                "redo not available"
            );
            return false;
        }
        if let Some(to) = self.history().undone().last() {
            debug!(from = %self.snapshot.current, %to, "redo");
        }
        self.snapshot.redo()
    }

    /// Check if [`undo`](Self::undo) would succeed (pure)
    pub fn can_undo(&self) -> bool {
        self.snapshot.history.can_undo()
    }

    /// Check if [`redo`](Self::redo) would succeed (pure)
    pub fn can_redo(&self) -> bool {
        self.snapshot.history.can_redo()
    }

    /// Return to the initial state and forget all history.
    pub fn reset(&mut self) {
        debug!(from = %self.snapshot.current, to = %self.config.initial, "reset");
        self.snapshot.reset_to(self.config.initial.clone());
    }

    /// Forget all history, keeping the current state.
    pub fn clear_history(&mut self) {
        debug!(
            past = self.history().past().len(),
            undone = self.history().undone().len(),
            "history cleared"
        );
        self.snapshot.clear_history();
    }

    /// Copy of the current state and history.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    /// Replace the current state and history with `snapshot`.
    ///
    /// Fails with [`FsmError::InvalidState`] if the snapshot names a state
    /// that is not in this machine's table.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        if let Some(unknown) = snapshot
            .states()
            .find(|state| !self.config.states.contains(state.as_str()))
        {
            return Err(FsmError::InvalidState(unknown.clone()));
        }
        debug!(current = %snapshot.current, "snapshot restored");
        self.snapshot = snapshot;
        Ok(())
    }
}

impl TryFrom<FsmConfig> for Fsm {
    type Error = FsmError;

    fn try_from(config: FsmConfig) -> Result<Self> {
        Self::new(config)
    }
}
