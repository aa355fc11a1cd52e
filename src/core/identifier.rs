//! Identifier trait for state and event names.
//!
//! States and events are opaque, comparable tokens. Any type that can be
//! hashed, compared and displayed qualifies, so `String`, `&'static str`
//! and user enums all work without extra ceremony.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// Implemented automatically for every type meeting the bounds.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied onto the history stacks
/// - `Eq` + `Hash`: identifiers key the state graph
/// - `Debug` + `Display`: identifiers are rendered into errors and logs
/// - `Send` + `Sync`: machines can sit behind a shared lock
///
/// # Example
///
/// ```rust
/// use rewind::core::Identifier;
/// use std::fmt;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl fmt::Display for Door {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Self::Open => f.write_str("Open"),
///             Self::Closed => f.write_str("Closed"),
///         }
///     }
/// }
///
/// fn assert_identifier<T: Identifier>() {}
/// assert_identifier::<Door>();
/// assert_identifier::<String>();
/// ```
pub trait Identifier: Clone + Eq + Hash + Debug + Display + Send + Sync {
    /// Render the identifier for error messages and log fields.
    fn label(&self) -> String {
        self.to_string()
    }
}

impl<T> Identifier for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync {}
