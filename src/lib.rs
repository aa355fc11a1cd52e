//! Rewind: a declarative finite state machine with undo/redo history
//!
//! A machine is described by a table of states and the named events that move
//! between them. The engine tracks the current state, resolves events against
//! that table, and keeps a linear history so any change can be undone and
//! redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: initial state plus per-state `event → destination` tables,
//!   loadable from JSON or assembled with builders
//! - **State graph**: immutable once built; declaration order is preserved
//! - **History**: undo and redo stacks; any new change discards the redo tail
//!
//! # Example
//!
//! ```rust
//! use rewind::{MachineError, StateMachine};
//!
//! let mut machine: StateMachine = StateMachine::from_json(
//!     r#"{
//!         "initial": "A",
//!         "states": {
//!             "A": { "transitions": { "go": "B" } },
//!             "B": { "transitions": { "back": "A" } }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! machine.trigger("go").unwrap();
//! assert_eq!(machine.state(), "B");
//!
//! assert!(matches!(
//!     machine.trigger("go"),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "A");
//! assert_eq!(machine.states_with_event("back"), vec!["B"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use config::{ConfigError, MachineConfig, StateConfig};
pub use self::core::{History, Identifier, StateGraph};
pub use machine::{MachineError, SharedStateMachine, StateMachine};
