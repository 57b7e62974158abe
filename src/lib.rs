//! Retrace: a small finite state machine with undo/redo history
//!
//! A machine is described by a declarative table: every state lists the
//! events it accepts and the state each event leads to. The engine tracks
//! one current state and keeps a linear history of moves that can be
//! walked back with `undo` and forward again with `redo`.
//!
//! # Core Concepts
//!
//! - **Table**: `state -> { event -> state }`, fixed at construction
//! - **Forward moves**: `change_state` and `trigger` push onto the undo stack
//! - **History**: `undo`/`redo` walk the stacks; any forward move after an
//!   undo discards the ability to redo
//! - **Snapshots**: the current state and history as a plain value
//!
//! # Example
//!
//! ```rust
//! use retrace::Fsm;
//!
//! let config = r#"{
//!     "initial": "A",
//!     "states": {
//!         "A": { "transitions": { "go": "B" } },
//!         "B": { "transitions": { "back": "A" } },
//!         "C": { "transitions": {} }
//!     }
//! }"#;
//!
//! let mut fsm = Fsm::from_json(config).unwrap();
//! fsm.trigger("go").unwrap();
//! assert_eq!(fsm.state(), "B");
//!
//! assert!(fsm.undo());
//! fsm.change_state("C").unwrap();
//!
//! // A forward move after undo discards the redo branch.
//! assert!(!fsm.redo());
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;
pub mod snapshot;

// Re-export commonly used types
pub use builder::FsmBuilder;
pub use core::{Direction, EventId, FsmConfig, History, StateId, TransitionTable};
pub use error::{ConfigurationError, FsmError, Result};
pub use machine::Fsm;
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
