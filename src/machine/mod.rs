//! The state-transition engine.
//!
//! # Key Concepts
//!
//! - **Transition table**: scoped transitions keyed by source kind, plus
//!   global transitions checked ahead of them every tick
//! - **State machine**: holds the current state, evaluates the table on
//!   `tick()` and runs the state lifecycle hooks in order
//! - **Configuration**: per-machine label and late-phase switch

mod config;
mod engine;
mod table;

pub use config::MachineConfig;
pub use engine::StateMachine;
pub use table::TransitionTable;
