//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify history and lookup properties hold
//! across randomly generated graphs and operation sequences.

use proptest::prelude::*;
use rewind::{MachineConfig, StateConfig, StateMachine};
use std::collections::HashSet;

const EVENTS: [&str; 4] = ["go", "back", "skip", "halt"];

#[derive(Clone, Debug)]
enum Op {
    Change(usize),
    Trigger(usize),
    Reset,
}

prop_compose! {
    fn arbitrary_config()(
        rows in prop::collection::vec(
            prop::collection::vec((0..EVENTS.len(), 0..6usize), 0..4),
            1..6,
        ),
        initial in 0..6usize,
    ) -> MachineConfig {
        let count = rows.len();
        let mut config = MachineConfig::new(format!("s{}", initial % count));
        for (i, row) in rows.into_iter().enumerate() {
            let mut state = StateConfig::new(format!("s{i}"));
            for (event, to) in row {
                state = state.on(EVENTS[event].to_string(), format!("s{}", to % count));
            }
            config = config.state(state);
        }
        config
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..6usize).prop_map(Op::Change),
        (0..EVENTS.len()).prop_map(Op::Trigger),
        Just(Op::Reset),
    ]
}

/// Apply `op`, returning whether it committed a new history entry.
fn apply(machine: &mut StateMachine, op: &Op) -> bool {
    match op {
        Op::Change(i) => {
            let target = machine.states()[i % machine.states().len()].clone();
            machine.change_state(target).is_ok()
        }
        Op::Trigger(e) => machine.trigger(EVENTS[*e]).is_ok(),
        Op::Reset => {
            machine.reset();
            true
        }
    }
}

proptest! {
    #[test]
    fn fresh_machine_has_no_history(config in arbitrary_config()) {
        let initial = config.initial.clone();
        let mut machine = StateMachine::new(config).unwrap();

        prop_assert_eq!(machine.state(), &initial);
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }

    #[test]
    fn undo_reverses_and_redo_replays(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut machine = StateMachine::new(config).unwrap();
        let start = machine.state().clone();

        let committed = ops.iter().filter(|op| apply(&mut machine, op)).count();
        let end = machine.state().clone();
        prop_assert_eq!(machine.history().undo_len(), committed);

        for _ in 0..committed {
            prop_assert!(machine.undo());
        }
        prop_assert_eq!(machine.state(), &start);
        prop_assert!(!machine.undo());

        for _ in 0..committed {
            prop_assert!(machine.redo());
        }
        prop_assert_eq!(machine.state(), &end);
        prop_assert!(!machine.redo());
    }

    #[test]
    fn commit_after_undo_discards_redo(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 1..12),
        undos in 1..12usize,
        target in 0..6usize,
    ) {
        let mut machine = StateMachine::new(config).unwrap();
        for op in &ops {
            apply(&mut machine, op);
        }
        for _ in 0..undos {
            machine.undo();
        }

        let target = machine.states()[target % machine.states().len()].clone();
        machine.change_state(target).unwrap();

        prop_assert!(!machine.redo());
    }

    #[test]
    fn states_listing_never_changes(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let declared: Vec<String> = config.states.iter().map(|s| s.id.clone()).collect();
        let mut machine = StateMachine::new(config).unwrap();

        for op in &ops {
            apply(&mut machine, op);
            prop_assert_eq!(machine.states(), declared.as_slice());
        }
        machine.undo();
        prop_assert_eq!(machine.states(), declared.as_slice());
    }

    #[test]
    fn transition_index_is_union_of_declared_events(config in arbitrary_config()) {
        let expected: HashSet<String> = config
            .states
            .iter()
            .flat_map(|s| s.transitions.keys().cloned())
            .collect();
        let machine = StateMachine::new(config).unwrap();

        let actual: HashSet<String> = machine.graph().transition_index().keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn trigger_errors_match_graph(config in arbitrary_config(), event in 0..EVENTS.len()) {
        let mut machine = StateMachine::new(config).unwrap();
        let event = EVENTS[event];
        let before = machine.state().clone();
        let expected = machine.transition_for(event).cloned();

        match machine.trigger(event) {
            Ok(()) => prop_assert_eq!(Some(machine.state().clone()), expected),
            Err(rewind::MachineError::UnknownEvent { .. }) => {
                prop_assert!(machine.states_with_event(event).is_empty());
                prop_assert_eq!(machine.state(), &before);
            }
            Err(rewind::MachineError::InvalidTransition { .. }) => {
                prop_assert!(expected.is_none());
                prop_assert!(!machine.states_with_event(event).is_empty());
                prop_assert_eq!(machine.state(), &before);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
