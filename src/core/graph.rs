//! Immutable state graph built from configuration.
//!
//! The graph maps each declared state to its outgoing transitions and keeps
//! the declaration order for listing. It is built once and never reshaped.

use super::identifier::Identifier;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, PartialEq)]
pub struct StateDefinition<S: Identifier, E: Identifier> {
    transitions: HashMap<E, S>,
}

impl<S: Identifier, E: Identifier> StateDefinition<S, E> {
    /// Create a definition from an event → destination table.
    pub fn new(transitions: HashMap<E, S>) -> Self {
        Self { transitions }
    }

    /// Destination reached by `event` from this state, if declared.
    pub fn destination<Q>(&self, event: &Q) -> Option<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.transitions.get(event)
    }

    /// Check whether this state declares `event`.
    pub fn accepts<Q>(&self, event: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.transitions.contains_key(event)
    }

    /// All outgoing transitions.
    pub fn transitions(&self) -> &HashMap<E, S> {
        &self.transitions
    }
}

/// Declared states, their transitions, and the global transition index.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateGraph;
/// use std::collections::HashMap;
///
/// let graph: StateGraph<&str, &str> = StateGraph::from_entries(vec![
///     ("A", HashMap::from([("go", "B")])),
///     ("B", HashMap::from([("back", "A")])),
/// ]);
///
/// assert_eq!(graph.states(), &["A", "B"]);
/// assert!(graph.is_known_event(&"back"));
/// assert!(!graph.is_known_event(&"missing"));
/// assert_eq!(graph.states_accepting(&"go"), vec![&"A"]);
/// ```
#[derive(Clone, Debug)]
pub struct StateGraph<S: Identifier, E: Identifier> {
    order: Vec<S>,
    definitions: HashMap<S, StateDefinition<S, E>>,
    index: HashMap<E, S>,
}

impl<S: Identifier, E: Identifier> StateGraph<S, E> {
    /// Build a graph from `(state, transitions)` pairs in declaration order.
    ///
    /// A repeated state keeps its first position and takes the transitions
    /// of its last declaration.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, HashMap<E, S>)>,
    {
        let mut order = Vec::new();
        let mut definitions = HashMap::new();

        for (state, transitions) in entries {
            if !definitions.contains_key(&state) {
                order.push(state.clone());
            }
            definitions.insert(state, StateDefinition::new(transitions));
        }

        // Later states overwrite earlier ones on shared event names. The index
        // only answers "is this event declared anywhere", so the winner never
        // affects where `trigger` goes.
        let mut index = HashMap::new();
        for state in &order {
            if let Some(definition) = definitions.get(state) {
                index.extend(
                    definition
                        .transitions()
                        .iter()
                        .map(|(event, to)| (event.clone(), to.clone())),
                );
            }
        }

        Self {
            order,
            definitions,
            index,
        }
    }

    /// Check whether `state` is declared.
    pub fn contains<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.definitions.contains_key(state)
    }

    /// Definition of `state`, if declared.
    pub fn definition<Q>(&self, state: &Q) -> Option<&StateDefinition<S, E>>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.definitions.get(state)
    }

    /// Destination of `event` from `state`; `None` when either is undeclared.
    pub fn resolve<Q>(&self, state: &S, event: &Q) -> Option<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.definition(state)?.destination(event)
    }

    /// All declared states in declaration order.
    pub fn states(&self) -> &[S] {
        &self.order
    }

    /// States whose own transitions include `event`, in declaration order.
    pub fn states_accepting<Q>(&self, event: &Q) -> Vec<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.is_known_event(event) {
            return Vec::new();
        }

        self.order
            .iter()
            .filter(|state| {
                self.definitions
                    .get(*state)
                    .is_some_and(|definition| definition.accepts(event))
            })
            .collect()
    }

    /// Check whether any state declares `event`.
    pub fn is_known_event<Q>(&self, event: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(event)
    }

    /// Global transition index: every declared event with the destination of
    /// its last-processed declaration.
    pub fn transition_index(&self) -> &HashMap<E, S> {
        &self.index
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no states are declared.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
