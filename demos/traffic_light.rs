//! Traffic Light State Machine
//!
//! This example drives a cyclic machine loaded from JSON and walks its
//! history back and forth.
//!
//! Key concepts:
//! - Loading a configuration document
//! - Event-driven transitions and direct jumps
//! - Undo/redo over the recorded history
//! - Structured logging via `tracing`
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example traffic_light

use rewind::{MachineError, StateMachine};
use tracing_subscriber::EnvFilter;

const TRAFFIC_LIGHT: &str = r#"{
    "initial": "Red",
    "states": {
        "Red": { "transitions": { "next": "Green" } },
        "Green": { "transitions": { "next": "Yellow" } },
        "Yellow": { "transitions": { "next": "Red" } },
        "Flashing": { "transitions": { "resume": "Red" } }
    }
}"#;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light: StateMachine = StateMachine::from_json(TRAFFIC_LIGHT)?;
    println!("Declared states: {:?}", light.states());
    println!("Initial state: {}\n", light.state());

    println!("Cycling:");
    for _ in 0..4 {
        light.trigger("next")?;
        println!("  next -> {}", light.state());
    }

    println!("\nMaintenance override:");
    light.change_state("Flashing")?;
    println!("  jump -> {}", light.state());

    match light.trigger("next") {
        Err(e) => println!("  next rejected: {e}"),
        Ok(()) => println!("  next unexpectedly accepted"),
    }

    println!("\nWalking history back:");
    while light.undo() {
        println!("  undo -> {}", light.state());
    }

    println!("\nAnd forward again:");
    while light.redo() {
        println!("  redo -> {}", light.state());
    }

    println!(
        "\nStates accepting 'resume': {:?}",
        light.states_with_event("resume")
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
