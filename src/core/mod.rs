//! Core state machine types.
//!
//! This module contains the building blocks the engine is made of:
//! - Identifier bounds for states and events
//! - The immutable state graph and its global transition index
//! - The linear undo/redo history

mod graph;
mod history;
mod identifier;

pub use graph::{StateDefinition, StateGraph};
pub use history::History;
pub use identifier::Identifier;
