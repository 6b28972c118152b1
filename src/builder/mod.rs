//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state machines
//! with validation at construction time, so the tick path never has to check
//! anything.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::{BuildError, BuildErrors};
pub use machine::StateMachineBuilder;
pub use transition::{Edge, TransitionBuilder};

use crate::core::{Guard, State, StateKind, StateRef, Transition, TransitionSource};

/// Scoped edge from `S` to `to`.
///
/// # Example
///
/// ```
/// use tickstate::builder::scoped_transition;
/// use tickstate::core::{Guard, StateRef};
/// use tickstate::unit_states;
///
/// unit_states! {
///     struct Idle;
///     struct Walk;
/// }
///
/// let edge = scoped_transition::<Idle>(StateRef::new(Walk), Guard::always());
/// ```
pub fn scoped_transition<S: State>(to: StateRef, guard: Guard) -> Edge {
    Edge {
        source: TransitionSource::Kind(StateKind::of::<S>()),
        transition: Transition::new(to, guard),
    }
}

/// Any-state edge to `to`.
pub fn global_transition(to: StateRef, guard: Guard) -> Edge {
    Edge {
        source: TransitionSource::Any,
        transition: Transition::new(to, guard),
    }
}
