//! The `State` trait and the shared handles the engine uses to refer to states.
//!
//! States are owned by the host. The engine only holds [`StateRef`] handles,
//! which share the host's instance and remember the concrete kind the
//! instance was created from.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Lifecycle unit driven by a [`StateMachine`](crate::machine::StateMachine).
///
/// Every hook has an empty default body, so a concrete state overrides only
/// the phases it cares about.
///
/// # Ordering
///
/// - `on_enter` runs once right after the state becomes current, after the
///   previous state's `on_exit` has returned.
/// - `on_tick` runs once per `tick()` while current, after the frame's
///   transition (if any) has been applied.
/// - `on_fixed_tick` / `on_late_tick` run from their own entry points and never
///   trigger transition evaluation.
/// - `on_exit` runs once when the state stops being current.
///
/// # Example
///
/// ```rust
/// use tickstate::core::State;
///
/// #[derive(Default)]
/// struct Idle {
///     frames: u32,
/// }
///
/// impl State for Idle {
///     fn on_enter(&mut self) {
///         self.frames = 0;
///     }
///
///     fn on_tick(&mut self) {
///         self.frames += 1;
///     }
/// }
/// ```
pub trait State: Any {
    fn on_enter(&mut self) {}

    fn on_tick(&mut self) {}

    fn on_fixed_tick(&mut self) {}

    fn on_late_tick(&mut self) {}

    fn on_exit(&mut self) {}
}

/// Identity of a concrete state type.
///
/// Scoped transitions are keyed by kind rather than by instance: every
/// instance of the same type shares one outgoing-transition list.
#[derive(Clone, Copy)]
pub struct StateKind {
    id: TypeId,
    name: &'static str,
}

impl StateKind {
    /// Kind of the state type `S`.
    pub fn of<S: State>() -> Self {
        Self {
            id: TypeId::of::<S>(),
            name: short_type_name(std::any::type_name::<S>()),
        }
    }

    /// Unqualified type name, for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for StateKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StateKind {}

impl Hash for StateKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    // Generic arguments may contain paths too; only trim the outer path.
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

/// Wrap a state in the shared cell a [`StateRef`] can be built from while the
/// host keeps a typed handle.
///
/// ```rust
/// use tickstate::core::{shared, State, StateRef};
///
/// struct Chase;
/// impl State for Chase {}
///
/// let chase = shared(Chase);
/// let handle = StateRef::from_shared(&chase);
/// assert_eq!(handle.kind().name(), "Chase");
/// ```
pub fn shared<S: State>(state: S) -> Rc<RefCell<S>> {
    Rc::new(RefCell::new(state))
}

/// Shared, identity-comparable handle to a host-owned state instance.
///
/// Cloning a `StateRef` clones the handle, not the state. Two handles are
/// [`same`](StateRef::same) only if they point at the same instance, even when
/// the instances are structurally identical.
#[derive(Clone)]
pub struct StateRef {
    kind: StateKind,
    cell: Rc<RefCell<dyn State>>,
}

impl StateRef {
    /// Move `state` into a new shared cell.
    pub fn new<S: State>(state: S) -> Self {
        Self::from_shared(&shared(state))
    }

    /// Share an existing cell with the host.
    pub fn from_shared<S: State>(cell: &Rc<RefCell<S>>) -> Self {
        let cell: Rc<RefCell<dyn State>> = cell.clone();
        Self {
            kind: StateKind::of::<S>(),
            cell,
        }
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Pointer identity.
    pub fn same(&self, other: &StateRef) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    /// True if this handle refers to the instance held in `cell`.
    pub fn is<S: State>(&self, cell: &Rc<RefCell<S>>) -> bool {
        let cell: Rc<RefCell<dyn State>> = cell.clone();
        Rc::ptr_eq(&self.cell, &cell)
    }

    pub(crate) fn enter(&self) {
        self.cell.borrow_mut().on_enter();
    }

    pub(crate) fn tick(&self) {
        self.cell.borrow_mut().on_tick();
    }

    pub(crate) fn fixed_tick(&self) {
        self.cell.borrow_mut().on_fixed_tick();
    }

    pub(crate) fn late_tick(&self) {
        self.cell.borrow_mut().on_late_tick();
    }

    pub(crate) fn exit(&self) {
        self.cell.borrow_mut().on_exit();
    }
}

impl fmt::Debug for StateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRef")
            .field("kind", &self.kind)
            .field("ptr", &Rc::as_ptr(&self.cell).cast::<()>())
            .finish()
    }
}

impl<S: State> From<&Rc<RefCell<S>>> for StateRef {
    fn from(cell: &Rc<RefCell<S>>) -> Self {
        Self::from_shared(cell)
    }
}
