//! Transition edges.

use super::guard::Guard;
use super::state::{StateKind, StateRef};

/// Where a transition is evaluated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionSource {
    /// Checked every tick regardless of the current state, before any scoped
    /// transition.
    Any,

    /// Checked only while a state of this kind is current.
    Kind(StateKind),
}

/// An edge to `target`, taken when `guard` passes.
///
/// Transitions are immutable once built. The table can drop them, but a
/// guard is never swapped in place.
#[derive(Clone, Debug)]
pub struct Transition {
    target: StateRef,
    guard: Guard,
}

impl Transition {
    pub fn new(target: StateRef, guard: Guard) -> Self {
        Self { target, guard }
    }

    pub fn target(&self) -> &StateRef {
        &self.target
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Evaluate the guard.
    pub fn can_execute(&self) -> bool {
        self.guard.check()
    }

    pub fn into_parts(self) -> (StateRef, Guard) {
        (self.target, self.guard)
    }
}
