//! Linear undo/redo history of visited states.
//!
//! History is a pair of stacks. Committing a new state pushes the previous
//! one onto the undo stack and drops the redo tail; undo and redo only move
//! entries between the two stacks.

use super::identifier::Identifier;
use std::mem;

/// Undo and redo stacks, most recent entry last.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new();
/// let mut current = "A";
///
/// history.commit(current);
/// current = "B";
///
/// assert!(history.step_back(&mut current));
/// assert_eq!(current, "A");
/// assert!(history.can_redo());
///
/// assert!(history.step_forward(&mut current));
/// assert_eq!(current, "B");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct History<S: Identifier> {
    undo: Vec<S>,
    redo: Vec<S>,
}

impl<S: Identifier> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Identifier> History<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Record `previous` as the state being left and discard the redo tail.
    pub fn commit(&mut self, previous: S) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Move one step back, swapping the restored state into `current`.
    ///
    /// The state being left goes onto the redo stack. Returns `false` and
    /// leaves `current` alone when there is nothing to undo.
    pub fn step_back(&mut self, current: &mut S) -> bool {
        let Some(restored) = self.undo.pop() else {
            return false;
        };
        self.redo.push(mem::replace(current, restored));
        true
    }

    /// Move one step forward, swapping the restored state into `current`.
    ///
    /// The state being left goes onto the undo stack. Returns `false` and
    /// leaves `current` alone when there is nothing to redo.
    pub fn step_forward(&mut self, current: &mut S) -> bool {
        let Some(restored) = self.redo.pop() else {
            return false;
        };
        self.undo.push(mem::replace(current, restored));
        true
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Previously current states, oldest first.
    pub fn undo_stack(&self) -> &[S] {
        &self.undo
    }

    /// Undone states, oldest first; the next redo target is last.
    pub fn redo_stack(&self) -> &[S] {
        &self.redo
    }
}
