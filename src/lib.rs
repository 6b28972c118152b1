//! Tickstate: a tick-driven finite state machine runtime
//!
//! Tickstate drives per-entity behavior in a frame loop. The host owns the
//! states and calls the machine once per frame; the machine decides whether
//! to change state and runs the state lifecycle hooks in a fixed order.
//!
//! # Core Concepts
//!
//! - **State**: A lifecycle unit with `on_enter`, `on_tick`, `on_fixed_tick`,
//!   `on_late_tick` and `on_exit` hooks, all optional
//! - **Guards**: Zero-argument predicates evaluated fresh on every tick
//! - **Transitions**: Scoped to a source state kind, or global (any state);
//!   global transitions always take priority
//! - **State machine**: Evaluates transitions on `tick()`, then ticks the
//!   current state
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tickstate::core::{Guard, StateKind, StateRef};
//! use tickstate::machine::StateMachine;
//! use tickstate::unit_states;
//!
//! unit_states! {
//!     struct Patrol;
//!     struct Chase;
//!     struct Dead;
//! }
//!
//! let sees_player = Rc::new(Cell::new(false));
//! let health = Rc::new(Cell::new(3));
//!
//! let patrol = StateRef::new(Patrol);
//! let chase = StateRef::new(Chase);
//! let dead = StateRef::new(Dead);
//!
//! let mut machine = StateMachine::new();
//! machine.add_transition(StateKind::of::<Patrol>(), chase.clone(), {
//!     let sees_player = Rc::clone(&sees_player);
//!     Guard::new(move || sees_player.get())
//! });
//! machine.add_global_transition(dead.clone(), {
//!     let health = Rc::clone(&health);
//!     Guard::new(move || health.get() <= 0)
//! });
//!
//! machine.initialize(patrol);
//! sees_player.set(true);
//! machine.tick();
//! assert!(machine.current_state().unwrap().same(&chase));
//!
//! health.set(0);
//! machine.tick();
//! assert!(machine.current_state().unwrap().same(&dead));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, BuildErrors, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Guard, State, StateKind, StateRef, StateRegistry};
pub use crate::machine::{MachineConfig, StateMachine, TransitionTable};
