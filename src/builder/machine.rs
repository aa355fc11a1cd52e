//! Builder for constructing state machines.

use crate::builder::state::StateBuilder;
use crate::config::{ConfigError, MachineConfig, StateConfig};
use crate::core::Identifier;
use crate::machine::{MachineError, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::builder::MachineBuilder;
///
/// let mut machine = MachineBuilder::<String, String>::new()
///     .initial("idle")
///     .state("idle", |s| s.on("start", "running"))
///     .state("running", |s| s.on("stop", "idle"))
///     .build()
///     .unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
/// ```
pub struct MachineBuilder<S: Identifier, E: Identifier> {
    initial: Option<S>,
    states: Vec<StateConfig<S, E>>,
}

impl<S: Identifier, E: Identifier> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, configuring its transitions in the closure.
    pub fn state<F>(mut self, id: impl Into<S>, configure: F) -> Self
    where
        F: FnOnce(StateBuilder<S, E>) -> StateBuilder<S, E>,
    {
        self.states.push(configure(StateBuilder::new(id)).build());
        self
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal(self, id: impl Into<S>) -> Self {
        self.state(id, |s| s)
    }

    /// Add a pre-built state declaration.
    pub fn add_state(mut self, state: StateConfig<S, E>) -> Self {
        self.states.push(state);
        self
    }

    /// Produce the configuration without building a machine.
    pub fn config(self) -> Result<MachineConfig<S, E>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or undeclared.
    pub fn build(self) -> Result<StateMachine<S, E>, MachineError> {
        StateMachine::new(self.config()?)
    }
}

impl<S: Identifier, E: Identifier> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
