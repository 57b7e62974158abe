//! Error types for machine construction and state changes.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, FsmError>;

/// Errors returned by [`Fsm`](crate::Fsm) operations.
///
/// Every failing operation leaves the machine exactly as it was before
/// the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// The configuration was missing or malformed.
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A state change targeted a state that is not in the table.
    #[error("Unknown state '{0}'")]
    InvalidState(StateId),

    /// The event has no transition from the current state.
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: StateId, event: EventId },
}

/// Reasons a configuration is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Configuration is missing")]
    Missing,

    #[error("Configuration could not be parsed: {0}")]
    Malformed(String),

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{0}' is not defined in the state table")]
    UnknownInitialState(StateId),

    #[error("Transition '{event}' from '{state}' targets undefined state '{target}'")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}
