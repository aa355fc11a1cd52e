//! Errors raised by state machine operations.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building or driving a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    #[error("Unknown event '{event}': no state declares it")]
    UnknownEvent { event: String },

    #[error("Event '{event}' is not valid from state '{state}'")]
    InvalidTransition { event: String, state: String },
}
