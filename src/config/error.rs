//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No configuration value was supplied
    #[error("No configuration supplied")]
    Missing,

    /// Builder finished without an initial state
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// Initial state is not among the declared states
    #[error("Initial state '{state}' is not a declared state")]
    UnknownInitialState { state: String },

    /// Configuration text could not be parsed
    #[error("Configuration parse failed: {0}")]
    Parse(String),

    /// Configuration could not be serialized
    #[error("Configuration serialization failed: {0}")]
    Serialization(String),
}
