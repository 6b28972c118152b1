//! Guard predicates for controlling state transitions.
//!
//! A guard takes no arguments and is evaluated fresh every time the engine
//! considers its transition. It may capture outside context (timers, sensor
//! readings, shared flags) but must not mutate the machine it guards.

use std::fmt;
use std::rc::Rc;

/// Zero-argument predicate gating a transition.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickstate::core::Guard;
///
/// let health = Rc::new(Cell::new(10));
/// let dead = {
///     let health = Rc::clone(&health);
///     Guard::new(move || health.get() <= 0)
/// };
///
/// assert!(!dead.check());
/// health.set(0);
/// assert!(dead.check());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Rc<dyn Fn() -> bool>,
}

impl Guard {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Rc::new(predicate),
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self {
        Guard::new(|| true)
    }

    /// Guard that never passes.
    pub fn never() -> Self {
        Guard::new(|| false)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }

    /// Passes when both pass. `other` is not evaluated if `self` fails.
    pub fn and(self, other: Guard) -> Self {
        Guard::new(move || self.check() && other.check())
    }

    /// Passes when either passes. `other` is not evaluated if `self` passes.
    pub fn or(self, other: Guard) -> Self {
        Guard::new(move || self.check() || other.check())
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

/// Passes when the inner guard fails.
impl std::ops::Not for Guard {
    type Output = Guard;

    fn not(self) -> Guard {
        Guard::new(move || !self.check())
    }
}
