//! Builder for a single state's outgoing transitions.

use crate::config::StateConfig;
use crate::core::Identifier;

/// Collects the transitions of one state with a fluent API.
pub struct StateBuilder<S: Identifier, E: Identifier> {
    config: StateConfig<S, E>,
}

impl<S: Identifier, E: Identifier> StateBuilder<S, E> {
    /// Start a state with no transitions.
    pub fn new(id: impl Into<S>) -> Self {
        Self {
            config: StateConfig::new(id.into()),
        }
    }

    /// Declare that `event` leads to `to`.
    pub fn on(mut self, event: impl Into<E>, to: impl Into<S>) -> Self {
        self.config = self.config.on(event.into(), to.into());
        self
    }

    /// Finish the state declaration.
    pub fn build(self) -> StateConfig<S, E> {
        self.config
    }
}
