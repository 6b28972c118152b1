//! Host-side lookup of state instances by kind.

use super::state::{State, StateKind, StateRef};
use crate::builder::BuildError;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

struct Entry {
    handle: StateRef,
    typed: Rc<dyn Any>,
}

/// One live instance per state kind, in registration order.
///
/// Hosts typically keep exactly one instance of each state type per entity.
/// The registry lets transitions name their target by kind and lets tooling
/// enumerate what an entity can be in.
#[derive(Default)]
pub struct StateRegistry {
    entries: Vec<Entry>,
    index: HashMap<StateKind, usize>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `state`, returning its handle.
    ///
    /// A second registration of the same kind replaces the first in place.
    pub fn insert<S: State>(&mut self, state: Rc<RefCell<S>>) -> StateRef {
        let handle = StateRef::from_shared(&state);
        let entry = Entry {
            handle: handle.clone(),
            typed: state,
        };
        match self.index.get(&handle.kind()) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(handle.kind(), self.entries.len());
                self.entries.push(entry);
            }
        }
        handle
    }

    pub fn get(&self, kind: StateKind) -> Option<&StateRef> {
        self.index.get(&kind).map(|&slot| &self.entries[slot].handle)
    }

    /// Typed access to the registered instance of `S`.
    pub fn get_typed<S: State>(&self) -> Option<Rc<RefCell<S>>> {
        let slot = *self.index.get(&StateKind::of::<S>())?;
        Rc::clone(&self.entries[slot].typed)
            .downcast::<RefCell<S>>()
            .ok()
    }

    /// Like [`get`](Self::get), but reports a missing kind as a build error.
    pub fn resolve(&self, kind: StateKind) -> Result<StateRef, BuildError> {
        self.get(kind)
            .cloned()
            .ok_or(BuildError::UnregisteredState { name: kind.name() })
    }

    pub fn contains(&self, kind: StateKind) -> bool {
        self.index.contains_key(&kind)
    }

    /// Registered handles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StateRef> {
        self.entries.iter().map(|entry| &entry.handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shared;

    #[derive(Default)]
    struct Idle {
        naps: u32,
    }
    impl State for Idle {}

    struct Alert;
    impl State for Alert {}

    #[test]
    fn insert_and_lookup_by_kind() {
        let mut registry = StateRegistry::new();
        let idle = registry.insert(shared(Idle::default()));

        let found = registry.get(StateKind::of::<Idle>()).unwrap();
        assert!(found.same(&idle));
        assert!(registry.contains(StateKind::of::<Idle>()));
        assert!(!registry.contains(StateKind::of::<Alert>()));
    }

    #[test]
    fn typed_access_returns_the_same_instance() {
        let mut registry = StateRegistry::new();
        let cell = shared(Idle::default());
        registry.insert(Rc::clone(&cell));

        let typed = registry.get_typed::<Idle>().unwrap();
        typed.borrow_mut().naps = 3;

        assert_eq!(cell.borrow().naps, 3);
        assert!(registry.get_typed::<Alert>().is_none());
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut registry = StateRegistry::new();
        registry.insert(shared(Idle::default()));
        registry.insert(shared(Alert));
        let replacement = registry.insert(shared(Idle::default()));

        assert_eq!(registry.len(), 2);
        let order: Vec<_> = registry.iter().map(|s| s.kind().name()).collect();
        assert_eq!(order, vec!["Idle", "Alert"]);
        assert!(registry.get(StateKind::of::<Idle>()).unwrap().same(&replacement));
    }

    #[test]
    fn resolve_reports_unregistered_kind() {
        let registry = StateRegistry::new();

        let result = registry.resolve(StateKind::of::<Alert>());

        assert!(matches!(
            result,
            Err(BuildError::UnregisteredState { name: "Alert" })
        ));
        assert!(registry.is_empty());
    }
}
