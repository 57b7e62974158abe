//! Core state machine types and logic.
//!
//! This module contains the pure data of the state machine:
//! - State and event labels
//! - The declarative transition table and configuration
//! - Immutable undo/redo history
//!
//! Nothing here mutates in place; the [`Fsm`](crate::Fsm) assembles these
//! values and swaps them in once an operation has succeeded.

mod history;
mod id;
mod table;

pub use history::{Direction, History};
pub use id::{EventId, StateId};
pub use table::{FsmConfig, StateNode, TransitionTable, Transitions};
