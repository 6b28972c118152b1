//! Guard Patrol
//!
//! A guard patrols until it sees the player, chases while the player stays in
//! view, and is knocked out from any state when its health runs out.
//!
//! Key concepts:
//! - Scoped transitions for normal behavior
//! - A global transition that interrupts whatever the guard is doing
//! - A simulated frame loop calling fixed, main and late phases
//!
//! Run with: RUST_LOG=tickstate=debug cargo run --example guard_patrol

use std::cell::Cell;
use std::rc::Rc;
use tickstate::core::{shared, Guard, State, StateKind, StateRef};
use tickstate::machine::{MachineConfig, StateMachine};
use tracing_subscriber::EnvFilter;

/// Inputs the host updates every frame.
#[derive(Default)]
struct Senses {
    player_visible: Cell<bool>,
    health: Cell<i32>,
}

#[derive(Default)]
struct Patrol {
    waypoint: usize,
}

impl State for Patrol {
    fn on_enter(&mut self) {
        println!("  [patrol] resuming route at waypoint {}", self.waypoint);
    }

    fn on_fixed_tick(&mut self) {
        self.waypoint = (self.waypoint + 1) % 4;
    }
}

#[derive(Default)]
struct Chase {
    frames: u32,
}

impl State for Chase {
    fn on_enter(&mut self) {
        self.frames = 0;
        println!("  [chase] spotted the player!");
    }

    fn on_tick(&mut self) {
        self.frames += 1;
    }

    fn on_exit(&mut self) {
        println!("  [chase] gave up after {} frames", self.frames);
    }
}

struct KnockedOut;

impl State for KnockedOut {
    fn on_enter(&mut self) {
        println!("  [knocked out] the guard collapses");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("=== Guard Patrol ===\n");

    let senses = Rc::new(Senses {
        health: Cell::new(3),
        ..Senses::default()
    });

    let patrol_cell = shared(Patrol::default());
    let patrol = StateRef::from_shared(&patrol_cell);
    let chase = StateRef::new(Chase::default());
    let knocked_out = StateRef::new(KnockedOut);

    let sees_player = {
        let senses = Rc::clone(&senses);
        Guard::new(move || senses.player_visible.get())
    };
    let out_of_health = {
        let senses = Rc::clone(&senses);
        Guard::new(move || senses.health.get() <= 0)
    };

    let mut machine = StateMachine::with_config(MachineConfig::new().with_label("guard-01"));
    machine.add_transition(StateKind::of::<Patrol>(), chase.clone(), sees_player.clone());
    machine.add_transition(StateKind::of::<Chase>(), patrol.clone(), !sees_player);
    machine.add_global_transition(knocked_out, out_of_health);

    machine.initialize(patrol);

    for frame in 0..10 {
        senses.player_visible.set((3..6).contains(&frame));
        if frame >= 7 {
            senses.health.set(senses.health.get() - 1);
        }

        machine.fixed_tick();
        machine.tick();
        machine.late_tick();

        let current = machine
            .current_state()
            .map_or("<none>", |state| state.kind().name());
        let next: Vec<_> = machine
            .potential_transitions()
            .map(|state| state.kind().name())
            .collect();
        println!("frame {frame}: {current:<10} could go to {next:?}");
    }

    println!("\nPatrol stopped at waypoint {}", patrol_cell.borrow().waypoint);

    machine.dispose();
    println!("\n=== Example Complete ===");
}
