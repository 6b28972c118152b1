//! Storage for transition edges.

use crate::core::{Guard, StateKind, StateRef, Transition};
use std::collections::HashMap;
use tracing::trace;

/// Scoped transitions keyed by source kind, plus a global list checked first.
///
/// Insertion order inside each partition is evaluation order.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    scoped: HashMap<StateKind, Vec<Transition>>,
    global: Vec<Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `from -> to`, creating the list for `from` on first use.
    pub fn add_scoped(&mut self, from: StateKind, to: StateRef, guard: Guard) {
        trace!(from = %from, to = %to.kind(), "adding scoped transition");
        self.scoped
            .entry(from)
            .or_default()
            .push(Transition::new(to, guard));
    }

    /// Append an any-state transition to `to`.
    pub fn add_global(&mut self, to: StateRef, guard: Guard) {
        trace!(to = %to.kind(), "adding global transition");
        self.global.push(Transition::new(to, guard));
    }

    /// Drop every scoped transition leaving `from`.
    pub fn remove_scoped(&mut self, from: StateKind) {
        if self.scoped.remove(&from).is_some() {
            trace!(from = %from, "removed scoped transitions");
        }
    }

    /// Drop every global transition whose target is the instance `to`.
    pub fn remove_global(&mut self, to: &StateRef) {
        let before = self.global.len();
        self.global.retain(|transition| !transition.target().same(to));
        trace!(
            to = %to.kind(),
            removed = before - self.global.len(),
            "removed global transitions"
        );
    }

    /// Transitions to evaluate while `current` is active: global first, then
    /// the scoped list for `current`, each in insertion order.
    ///
    /// Does not allocate. A kind with no scoped list contributes nothing.
    pub fn query(&self, current: StateKind) -> impl Iterator<Item = &Transition> + '_ {
        self.global.iter().chain(self.scoped(current).iter())
    }

    pub fn global(&self) -> &[Transition] {
        &self.global
    }

    /// Scoped transitions leaving `from`, or an empty slice.
    pub fn scoped(&self, from: StateKind) -> &[Transition] {
        self.scoped.get(&from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of edges in both partitions.
    pub fn len(&self) -> usize {
        self.global.len() + self.scoped.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.scoped.clear();
        self.global.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    struct Idle;
    impl State for Idle {}

    struct Walk;
    impl State for Walk {}

    struct Stunned;
    impl State for Stunned {}

    fn targets<'a>(transitions: impl Iterator<Item = &'a Transition>) -> Vec<StateRef> {
        transitions.map(|t| t.target().clone()).collect()
    }

    #[test]
    fn query_puts_global_before_scoped() {
        let mut table = TransitionTable::new();
        let walk = StateRef::new(Walk);
        let stunned = StateRef::new(Stunned);

        table.add_scoped(StateKind::of::<Idle>(), walk.clone(), Guard::always());
        table.add_global(stunned.clone(), Guard::always());

        let order = targets(table.query(StateKind::of::<Idle>()));
        assert_eq!(order.len(), 2);
        assert!(order[0].same(&stunned));
        assert!(order[1].same(&walk));
    }

    #[test]
    fn query_keeps_insertion_order_within_partitions() {
        let mut table = TransitionTable::new();
        let first = StateRef::new(Walk);
        let second = StateRef::new(Stunned);
        let third = StateRef::new(Walk);

        table.add_scoped(StateKind::of::<Idle>(), first.clone(), Guard::never());
        table.add_scoped(StateKind::of::<Idle>(), second.clone(), Guard::never());
        table.add_scoped(StateKind::of::<Idle>(), third.clone(), Guard::never());

        let order = targets(table.query(StateKind::of::<Idle>()));
        assert!(order[0].same(&first));
        assert!(order[1].same(&second));
        assert!(order[2].same(&third));
    }

    #[test]
    fn query_for_unknown_kind_yields_only_globals() {
        let mut table = TransitionTable::new();
        table.add_scoped(StateKind::of::<Idle>(), StateRef::new(Walk), Guard::always());

        assert_eq!(table.query(StateKind::of::<Walk>()).count(), 0);
        assert!(table.scoped(StateKind::of::<Walk>()).is_empty());
    }

    #[test]
    fn remove_scoped_drops_the_whole_list() {
        let mut table = TransitionTable::new();
        table.add_scoped(StateKind::of::<Idle>(), StateRef::new(Walk), Guard::always());
        table.add_scoped(StateKind::of::<Idle>(), StateRef::new(Stunned), Guard::always());
        table.add_scoped(StateKind::of::<Walk>(), StateRef::new(Idle), Guard::always());

        table.remove_scoped(StateKind::of::<Idle>());

        assert_eq!(table.query(StateKind::of::<Idle>()).count(), 0);
        assert_eq!(table.scoped(StateKind::of::<Walk>()).len(), 1);
    }

    #[test]
    fn remove_global_matches_by_identity() {
        let mut table = TransitionTable::new();
        let stunned = StateRef::new(Stunned);
        let other_stunned = StateRef::new(Stunned);

        table.add_global(stunned.clone(), Guard::always());
        table.add_global(other_stunned.clone(), Guard::always());
        table.add_global(stunned.clone(), Guard::never());

        table.remove_global(&stunned);

        assert_eq!(table.global().len(), 1);
        assert!(table.global()[0].target().same(&other_stunned));
    }

    #[test]
    fn len_counts_both_partitions() {
        let mut table = TransitionTable::new();
        assert!(table.is_empty());

        table.add_global(StateRef::new(Stunned), Guard::always());
        table.add_scoped(StateKind::of::<Idle>(), StateRef::new(Walk), Guard::always());
        table.add_scoped(StateKind::of::<Walk>(), StateRef::new(Idle), Guard::always());
        assert_eq!(table.len(), 3);

        table.clear();
        assert!(table.is_empty());
    }
}
