//! Thread-safe handle around a single state machine.

use super::{MachineError, StateMachine};
use crate::core::Identifier;
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

/// Cloneable, lock-guarded handle to a [`StateMachine`].
///
/// Every operation takes the lock exactly once, so each mutation reads and
/// writes the current state and history as one critical section. The lock is
/// `parking_lot`, so a panic under the lock does not poison the machine.
///
/// # Example
///
/// ```rust
/// use rewind::{SharedStateMachine, StateMachine};
/// use std::thread;
///
/// let machine: StateMachine = StateMachine::from_json(
///     r#"{ "initial": "off", "states": {
///         "off": { "transitions": { "toggle": "on" } },
///         "on": { "transitions": { "toggle": "off" } }
///     } }"#,
/// )
/// .unwrap();
/// let shared = SharedStateMachine::new(machine);
///
/// let worker = shared.clone();
/// thread::spawn(move || worker.trigger("toggle").unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.state(), "on");
/// ```
#[derive(Debug)]
pub struct SharedStateMachine<S: Identifier = String, E: Identifier = String> {
    inner: Arc<Mutex<StateMachine<S, E>>>,
}

impl<S: Identifier, E: Identifier> Clone for SharedStateMachine<S, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Identifier, E: Identifier> From<StateMachine<S, E>> for SharedStateMachine<S, E> {
    fn from(machine: StateMachine<S, E>) -> Self {
        Self::new(machine)
    }
}

impl<S: Identifier, E: Identifier> SharedStateMachine<S, E> {
    /// Wrap a machine for shared use.
    pub fn new(machine: StateMachine<S, E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.inner.lock().state().clone()
    }

    pub fn change_state(&self, state: impl Into<S>) -> Result<(), MachineError> {
        self.inner.lock().change_state(state)
    }

    pub fn trigger<Q>(&self, event: &Q) -> Result<(), MachineError>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.inner.lock().trigger(event)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Snapshot of all declared states.
    pub fn states(&self) -> Vec<S> {
        self.inner.lock().states().to_vec()
    }

    /// Snapshot of the states declaring `event`.
    pub fn states_with_event<Q>(&self, event: &Q) -> Vec<S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner
            .lock()
            .states_with_event(event)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn undo(&self) -> bool {
        self.inner.lock().undo()
    }

    pub fn redo(&self) -> bool {
        self.inner.lock().redo()
    }

    pub fn clear_history(&self) {
        self.inner.lock().clear_history();
    }

    /// Run `f` with exclusive access, for sequences that must not interleave
    /// with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateMachine<S, E>) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}
