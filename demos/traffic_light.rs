//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine built with the builder API.
//!
//! Key concepts:
//! - Marker states declared with `unit_states!`
//! - Transitions targeting registered states by kind
//! - Guards reading a shared frame timer
//! - Validation that reports every mistake at once
//!
//! Run with: cargo run --example traffic_light

use std::cell::Cell;
use std::rc::Rc;
use tickstate::builder::{StateMachineBuilder, TransitionBuilder};
use tickstate::core::{shared, Guard};
use tickstate::unit_states;

unit_states! {
    struct Red;
    struct Yellow;
    struct Green;
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let frame = Rc::new(Cell::new(0u32));
    let every = |period: u32| {
        let frame = Rc::clone(&frame);
        Guard::new(move || frame.get() % period == 0)
    };

    let mut machine = StateMachineBuilder::new()
        .register(shared(Red))
        .register(shared(Yellow))
        .register(shared(Green))
        .transitions(vec![
            TransitionBuilder::new()
                .from::<Red>()
                .to_kind::<Green>()
                .guard(every(5)),
            TransitionBuilder::new()
                .from::<Green>()
                .to_kind::<Yellow>()
                .guard(every(4)),
            TransitionBuilder::new()
                .from::<Yellow>()
                .to_kind::<Red>()
                .guard(every(2)),
        ])
        .initial_kind::<Red>()
        .build()
        .expect("traffic light definition is valid");

    for tick in 1..=20 {
        frame.set(tick);
        machine.tick();
        if let Some(state) = machine.current_state() {
            println!("tick {tick:>2}: {}", state.kind());
        }
    }

    println!("\nA definition with mistakes reports all of them:");
    let broken = StateMachineBuilder::new()
        .register(shared(Red))
        .transition(TransitionBuilder::new().from::<Red>().to_kind::<Green>().always())
        .transition(TransitionBuilder::new().to_kind::<Red>())
        .build();

    if let Err(errors) = broken {
        for error in errors.iter() {
            println!("  - {error}");
        }
    }

    println!("\n=== Example Complete ===");
}
