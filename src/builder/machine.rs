//! Builder for constructing state machines.

use crate::core::{EventId, FsmConfig, StateId, TransitionTable};
use crate::error::{ConfigurationError, Result};
use crate::machine::Fsm;

/// Builder for constructing state machines with a fluent API.
///
/// Transitions declare both of their endpoints, so terminal states only
/// need an explicit [`state`](Self::state) call when nothing leads to them.
#[derive(Clone, Debug, Default)]
pub struct FsmBuilder {
    initial: Option<StateId>,
    table: TransitionTable,
}

impl FsmBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: TransitionTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with or without transitions.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.table.add_state(state);
        self
    }

    /// Add `from --event--> to`.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        let to = to.into();
        self.table.add_state(to.clone());
        self.table.add_transition(from, event, to);
        self
    }

    /// Build the configuration without starting a machine.
    /// Returns an error if required fields are missing or the table is inconsistent.
    pub fn build_config(self) -> Result<FsmConfig> {
        let initial = self
            .initial
            .ok_or(ConfigurationError::MissingInitialState)?;
        let config = FsmConfig::new(initial, self.table);
        config.validate()?;
        Ok(config)
    }

    /// Build the state machine.
    pub fn build(self) -> Result<Fsm> {
        Fsm::new(self.build_config()?)
    }
}
