//! Declarative state/transition table and machine configuration.
//!
//! The table maps every state to the events it accepts and the state each
//! event leads to. It is plain data: it never changes once a machine owns it.

use super::id::{EventId, StateId};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outgoing transitions of one state, keyed by event.
pub type Transitions = BTreeMap<EventId, StateId>;

/// A single entry of the state table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    /// Events accepted in this state and their destinations.
    #[serde(default)]
    pub transitions: Transitions,
}

impl StateNode {
    /// Create an entry with the given outgoing transitions.
    pub fn new(transitions: Transitions) -> Self {
        Self { transitions }
    }
}

/// Mapping from state to its outgoing transitions.
///
/// States are kept in key order, so enumeration is deterministic.
///
/// # Example
///
/// ```rust
/// use retrace::core::TransitionTable;
///
/// let mut table = TransitionTable::new();
/// table.add_transition("green", "timer", "yellow");
/// table.add_transition("yellow", "timer", "red");
/// table.add_transition("red", "timer", "green");
///
/// assert_eq!(table.target("green", "timer").unwrap(), "yellow");
/// assert!(table.target("green", "panic").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    states: BTreeMap<StateId, StateNode>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            states: BTreeMap::new(),
        }
    }

    /// Insert or replace a state and its transitions.
    pub fn insert(&mut self, state: impl Into<StateId>, transitions: Transitions) {
        self.states.insert(state.into(), StateNode::new(transitions));
    }

    /// Declare a state with no transitions. Existing entries are kept.
    pub fn add_state(&mut self, state: impl Into<StateId>) {
        self.states.entry(state.into()).or_default();
    }

    /// Add `from --event--> to`, declaring `from` if needed.
    ///
    /// The destination is not declared; [`FsmConfig::validate`] reports it
    /// if it never gets an entry of its own.
    pub fn add_transition(
        &mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
    }

    /// Check if `state` has an entry (pure)
    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Get the entry for `state` (pure)
    pub fn get(&self, state: &str) -> Option<&StateNode> {
        self.states.get(state)
    }

    /// Destination of `event` when fired from `state`, if any.
    pub fn target(&self, state: &str, event: &str) -> Option<&StateId> {
        self.states
            .get(state)
            .and_then(|node| node.transitions.get(event))
    }

    /// Every state in table order.
    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.states.keys()
    }

    /// States that have an outgoing transition keyed by `event`.
    pub fn states_accepting(&self, event: &str) -> Vec<&StateId> {
        self.states
            .iter()
            .filter(|(_, node)| node.transitions.contains_key(event))
            .map(|(state, _)| state)
            .collect()
    }

    /// All `(state, event, target)` triples in table order.
    pub fn iter_transitions(&self) -> impl Iterator<Item = (&StateId, &EventId, &StateId)> {
        self.states.iter().flat_map(|(state, node)| {
            node.transitions
                .iter()
                .map(move |(event, target)| (state, event, target))
        })
    }

    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the table has no states (pure)
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Immutable input used to construct a machine.
///
/// Deserializes from the shape
/// `{ "initial": S, "states": { S: { "transitions": { E: S } } } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmConfig {
    pub initial: StateId,
    pub states: TransitionTable,
}

impl FsmConfig {
    /// Pair an initial state with a table. Nothing is validated yet.
    pub fn new(initial: impl Into<StateId>, states: TransitionTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Check that the initial state and every transition target exist.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.states.contains(self.initial.as_str()) {
            return Err(ConfigurationError::UnknownInitialState(
                self.initial.clone(),
            ));
        }

        if let Some((state, event, target)) = self
            .states
            .iter_transitions()
            .find(|(_, _, target)| !self.states.contains(target.as_str()))
        {
            return Err(ConfigurationError::UnknownTarget {
                state: state.clone(),
                event: event.clone(),
                target: target.clone(),
            });
        }

        Ok(())
    }
}
