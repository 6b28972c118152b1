//! Core building blocks of the engine.
//!
//! - State definitions via the `State` trait and shared `StateRef` handles
//! - Zero-argument `Guard` predicates
//! - `Transition` edges and where they are evaluated from
//! - A `StateRegistry` for hosts that look states up by kind

mod guard;
mod registry;
mod state;
mod transition;

pub use guard::Guard;
pub use registry::StateRegistry;
pub use state::{shared, State, StateKind, StateRef};
pub use transition::{Transition, TransitionSource};
