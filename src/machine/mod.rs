//! The state machine engine.
//!
//! A [`StateMachine`] owns its state graph, the current state, and a linear
//! undo/redo history. `change_state`, `trigger` and `reset` commit a new
//! state and discard any redo tail; `undo` and `redo` walk the history
//! without changing it.

mod error;
mod shared;

pub use error::MachineError;
pub use shared::SharedStateMachine;

use crate::config::{ConfigError, MachineConfig};
use crate::core::{History, Identifier, StateGraph};
use serde::de::DeserializeOwned;
use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;
use std::mem;

/// Finite state machine with undo/redo history.
///
/// # Example
///
/// ```rust
/// use rewind::StateMachine;
///
/// let mut machine: StateMachine = StateMachine::from_json(
///     r#"{
///         "initial": "A",
///         "states": {
///             "A": { "transitions": { "go": "B" } },
///             "B": { "transitions": { "back": "A" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "B");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "A");
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: Identifier = String, E: Identifier = String> {
    graph: StateGraph<S, E>,
    initial: S,
    current: S,
    history: History<S>,
}

impl<S: Identifier, E: Identifier> StateMachine<S, E> {
    /// Create a machine from an optional configuration.
    ///
    /// `None` means no configuration was supplied and fails with
    /// [`ConfigError::Missing`].
    pub fn create(config: Option<MachineConfig<S, E>>) -> Result<Self, MachineError> {
        let config = config.ok_or(ConfigError::Missing)?;
        Self::new(config)
    }

    /// Create a machine in the configured initial state with empty history.
    ///
    /// Fails when the initial state is not among the declared states.
    pub fn new(config: MachineConfig<S, E>) -> Result<Self, MachineError> {
        config.validate()?;

        let MachineConfig { initial, states } = config;
        let graph = StateGraph::from_entries(
            states
                .into_iter()
                .map(|state| (state.id, state.transitions)),
        );

        tracing::debug!(
            initial = %initial,
            states = graph.len(),
            events = graph.transition_index().len(),
            "state machine created"
        );

        Ok(Self {
            graph,
            current: initial.clone(),
            initial,
            history: History::new(),
        })
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.current
    }

    /// State the machine started in; `reset` returns here.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The immutable state graph.
    pub fn graph(&self) -> &StateGraph<S, E> {
        &self.graph
    }

    /// Read-only view of the undo/redo stacks.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Jump straight to `state`, ignoring the transition table.
    pub fn change_state(&mut self, state: impl Into<S>) -> Result<(), MachineError> {
        let state = state.into();
        if !self.graph.contains(&state) {
            tracing::warn!(state = %state, "change_state rejected: unknown state");
            return Err(MachineError::UnknownState {
                state: state.label(),
            });
        }

        self.commit(state, "change_state");
        Ok(())
    }

    /// Follow the transition declared for `event` from the current state.
    ///
    /// Fails with [`MachineError::UnknownEvent`] when no state declares
    /// `event`, and with [`MachineError::InvalidTransition`] when it is
    /// declared elsewhere but not from the current state.
    pub fn trigger<Q>(&mut self, event: &Q) -> Result<(), MachineError>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        if !self.graph.is_known_event(event) {
            tracing::warn!(event = %event, state = %self.current, "trigger rejected: unknown event");
            return Err(MachineError::UnknownEvent {
                event: event.to_string(),
            });
        }

        let Some(to) = self.graph.resolve(&self.current, event).cloned() else {
            tracing::warn!(event = %event, state = %self.current, "trigger rejected: invalid transition");
            return Err(MachineError::InvalidTransition {
                event: event.to_string(),
                state: self.current.label(),
            });
        };

        tracing::trace!(event = %event, "resolved transition");
        self.commit(to, "trigger");
        Ok(())
    }

    /// Destination `event` would lead to from the current state, without moving.
    pub fn transition_for<Q>(&self, event: &Q) -> Option<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.graph.resolve(&self.current, event)
    }

    /// Return to the initial state. Always records a history entry, even when
    /// the machine is already in the initial state.
    pub fn reset(&mut self) {
        self.commit(self.initial.clone(), "reset");
    }

    /// All declared states in declaration order.
    pub fn states(&self) -> &[S] {
        self.graph.states()
    }

    /// States that declare `event`, in declaration order.
    ///
    /// An event no state declares yields an empty list rather than an error.
    pub fn states_with_event<Q>(&self, event: &Q) -> Vec<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.graph.states_accepting(event)
    }

    /// Go back to the previous state. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let from = self.current.clone();
        if !self.history.step_back(&mut self.current) {
            tracing::trace!(state = %self.current, "undo unavailable");
            return false;
        }

        tracing::debug!(from = %from, to = %self.current, op = "undo", "state restored");
        true
    }

    /// Re-apply the most recently undone state. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let from = self.current.clone();
        if !self.history.step_forward(&mut self.current) {
            tracing::trace!(state = %self.current, "redo unavailable");
            return false;
        }

        tracing::debug!(from = %from, to = %self.current, op = "redo", "state restored");
        true
    }

    /// Forget all undo and redo entries. The current state is kept.
    pub fn clear_history(&mut self) {
        tracing::debug!(
            undo = self.history.undo_len(),
            redo = self.history.redo_len(),
            "history cleared"
        );
        self.history.clear();
    }

    fn commit(&mut self, to: S, op: &'static str) {
        let from = mem::replace(&mut self.current, to);
        tracing::debug!(from = %from, to = %self.current, op, "state changed");
        self.history.commit(from);
    }
}

impl<S, E> StateMachine<S, E>
where
    S: Identifier + DeserializeOwned,
    E: Identifier + DeserializeOwned,
{
    /// Parse a JSON configuration and build a machine from it.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        Self::new(MachineConfig::from_json(json)?)
    }
}

impl<S: Identifier, E: Identifier> TryFrom<MachineConfig<S, E>> for StateMachine<S, E> {
    type Error = MachineError;

    fn try_from(config: MachineConfig<S, E>) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
