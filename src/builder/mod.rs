//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and a macro for declaring state
//! machines in code instead of loading a configuration document.

pub mod machine;
pub mod macros;
pub mod state;

pub use machine::MachineBuilder;
pub use state::StateBuilder;

use crate::core::Identifier;
use crate::machine::{MachineError, StateMachine};

/// Build a machine from `(state, [(event, destination)])` rows.
///
/// # Example
///
/// ```
/// use rewind::builder::from_table;
///
/// let mut machine = from_table(
///     "A",
///     [("A", vec![("go", "B")]), ("B", vec![("back", "A")])],
/// )
/// .unwrap();
///
/// machine.trigger("go").unwrap();
/// assert_eq!(*machine.state(), "B");
/// ```
pub fn from_table<S, E, R, T>(initial: S, rows: R) -> Result<StateMachine<S, E>, MachineError>
where
    S: Identifier,
    E: Identifier,
    R: IntoIterator<Item = (S, T)>,
    T: IntoIterator<Item = (E, S)>,
{
    rows.into_iter()
        .fold(MachineBuilder::new().initial(initial), |builder, (state, transitions)| {
            builder.state(state, |s| {
                transitions
                    .into_iter()
                    .fold(s, |s, (event, to)| s.on(event, to))
            })
        })
        .build()
}
