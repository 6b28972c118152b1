//! The tick-driven state machine.

use crate::builder::{BuildError, Edge, TransitionBuilder};
use crate::core::{Guard, StateKind, StateRef, Transition, TransitionSource};
use crate::machine::config::MachineConfig;
use crate::machine::table::TransitionTable;
use tracing::{debug, trace};
use uuid::Uuid;

/// Why the current state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cause {
    Global,
    Scoped,
    Override,
}

impl Cause {
    fn as_str(self) -> &'static str {
        match self {
            Cause::Global => "global",
            Cause::Scoped => "scoped",
            Cause::Override => "override",
        }
    }
}

/// Finite state machine driven by a host frame loop.
///
/// Each host entity owns one machine. The host calls [`tick`](Self::tick)
/// once per logical frame, and [`fixed_tick`](Self::fixed_tick) /
/// [`late_tick`](Self::late_tick) from the matching phases of its loop.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickstate::core::{Guard, State, StateKind, StateRef};
/// use tickstate::machine::StateMachine;
///
/// struct Idle;
/// impl State for Idle {}
///
/// struct Alert;
/// impl State for Alert {}
///
/// let noise = Rc::new(Cell::new(false));
/// let idle = StateRef::new(Idle);
/// let alert = StateRef::new(Alert);
///
/// let mut machine = StateMachine::new();
/// machine.add_transition(StateKind::of::<Idle>(), alert.clone(), {
///     let noise = Rc::clone(&noise);
///     Guard::new(move || noise.get())
/// });
///
/// machine.initialize(idle.clone());
/// machine.tick();
/// assert!(machine.current_state().unwrap().same(&idle));
///
/// noise.set(true);
/// machine.tick();
/// assert!(machine.current_state().unwrap().same(&alert));
/// ```
#[derive(Debug)]
pub struct StateMachine {
    id: Uuid,
    config: MachineConfig,
    current: Option<StateRef>,
    table: TransitionTable,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create an empty machine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            current: None,
            table: TransitionTable::new(),
        }
    }

    /// Unique id of this machine, attached to its log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The current state, if the machine is running.
    pub fn current_state(&self) -> Option<&StateRef> {
        self.current.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Targets that could be taken from the current state, in evaluation
    /// order: global targets first, then the current kind's scoped targets.
    ///
    /// Guards are not evaluated. Empty when the machine is not running.
    pub fn potential_transitions(&self) -> impl Iterator<Item = &StateRef> + '_ {
        self.current
            .as_ref()
            .map(|current| self.table.query(current.kind()))
            .into_iter()
            .flatten()
            .map(Transition::target)
    }

    /// Enter `initial` if the machine is empty.
    ///
    /// A running machine ignores the call; `stop()` it first to restart.
    pub fn initialize(&mut self, initial: StateRef) {
        if let Some(current) = &self.current {
            trace!(
                machine = %self.id,
                label = %self.config.label,
                current = %current.kind(),
                "already initialized"
            );
            return;
        }
        debug!(
            machine = %self.id,
            label = %self.config.label,
            state = %initial.kind(),
            "initializing"
        );
        self.current = Some(initial.clone());
        initial.enter();
    }

    /// Advance one logical frame.
    ///
    /// Global transitions are checked first, then the current kind's scoped
    /// transitions; the first passing guard wins. After any state change the
    /// (possibly new) current state's `on_tick` runs.
    pub fn tick(&mut self) {
        let Some(kind) = self.current.as_ref().map(StateRef::kind) else {
            trace!(machine = %self.id, "tick on empty machine");
            return;
        };

        if let Some((target, cause)) = self.evaluate(kind) {
            self.change_state(target, cause);
        }

        if let Some(current) = &self.current {
            current.tick();
        }
    }

    /// Forward the fixed-rate phase to the current state.
    pub fn fixed_tick(&mut self) {
        if let Some(current) = &self.current {
            current.fixed_tick();
        }
    }

    /// Forward the late phase to the current state, when enabled in the
    /// configuration.
    pub fn late_tick(&mut self) {
        if !self.config.late_tick {
            trace!(machine = %self.id, "late phase disabled");
            return;
        }
        if let Some(current) = &self.current {
            current.late_tick();
        }
    }

    /// Switch to `state` outside of tick evaluation.
    ///
    /// Runs the old state's `on_exit` and the new state's `on_enter`. Asking
    /// for the instance that is already current does nothing.
    pub fn set_state(&mut self, state: StateRef) {
        self.change_state(state, Cause::Override);
    }

    /// Exit the current state and leave the machine empty.
    pub fn stop(&mut self) {
        match self.current.take() {
            Some(previous) => {
                previous.exit();
                debug!(
                    machine = %self.id,
                    label = %self.config.label,
                    state = %previous.kind(),
                    "stopped"
                );
            }
            None => trace!(machine = %self.id, "stop on empty machine"),
        }
    }

    /// Stop, then drop every transition.
    pub fn dispose(&mut self) {
        self.stop();
        self.table.clear();
        debug!(machine = %self.id, label = %self.config.label, "disposed");
    }

    /// Add a transition taken while a state of kind `from` is current.
    pub fn add_transition(&mut self, from: StateKind, to: StateRef, guard: Guard) {
        self.table.add_scoped(from, to, guard);
    }

    /// Add a transition checked from every state, ahead of scoped ones.
    pub fn add_global_transition(&mut self, to: StateRef, guard: Guard) {
        self.table.add_global(to, guard);
    }

    /// Drop all scoped transitions leaving `from`.
    pub fn remove_transitions(&mut self, from: StateKind) {
        self.table.remove_scoped(from);
    }

    /// Drop all global transitions targeting the instance `to`.
    pub fn remove_global_transition(&mut self, to: &StateRef) {
        self.table.remove_global(to);
    }

    /// Build `builder` and add the result.
    pub fn add(&mut self, builder: TransitionBuilder) -> Result<(), BuildError> {
        let edge = builder.build()?;
        self.insert(edge);
        Ok(())
    }

    /// Add an already validated edge.
    pub fn insert(&mut self, edge: Edge) {
        let Edge { source, transition } = edge;
        let (target, guard) = transition.into_parts();
        match source {
            TransitionSource::Any => self.add_global_transition(target, guard),
            TransitionSource::Kind(from) => self.add_transition(from, target, guard),
        }
    }

    fn evaluate(&self, kind: StateKind) -> Option<(StateRef, Cause)> {
        let global_len = self.table.global().len();
        self.table
            .query(kind)
            .enumerate()
            .find(|(_, transition)| transition.can_execute())
            .map(|(position, transition)| {
                let cause = if position < global_len {
                    Cause::Global
                } else {
                    Cause::Scoped
                };
                (transition.target().clone(), cause)
            })
    }

    fn change_state(&mut self, target: StateRef, cause: Cause) {
        if let Some(current) = &self.current {
            if current.same(&target) {
                trace!(
                    machine = %self.id,
                    state = %current.kind(),
                    cause = cause.as_str(),
                    "target already current"
                );
                return;
            }
        }

        let previous = self.current.take();
        if let Some(previous) = &previous {
            previous.exit();
        }
        debug!(
            machine = %self.id,
            label = %self.config.label,
            from = previous.as_ref().map_or("<none>", |state| state.kind().name()),
            to = %target.kind(),
            cause = cause.as_str(),
            "state change"
        );
        self.current = Some(target.clone());
        target.enter();
    }
}
