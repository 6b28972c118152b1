//! Builder for constructing state machines.

use crate::builder::error::{BuildError, BuildErrors};
use crate::builder::transition::{Target, TransitionBuilder};
use crate::core::{State, StateKind, StateRef, StateRegistry};
use crate::machine::{MachineConfig, StateMachine};
use std::cell::RefCell;
use std::rc::Rc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Builder for constructing state machines with a fluent API.
///
/// Transitions are validated together when [`build`](Self::build) runs, so a
/// definition with several mistakes reports all of them.
///
/// # Example
///
/// ```rust
/// use tickstate::builder::{StateMachineBuilder, TransitionBuilder};
/// use tickstate::core::{shared, State};
///
/// struct Closed;
/// impl State for Closed {}
///
/// struct Open;
/// impl State for Open {}
///
/// let machine = StateMachineBuilder::new()
///     .register(shared(Closed))
///     .register(shared(Open))
///     .transition(TransitionBuilder::new().from::<Closed>().to_kind::<Open>().always())
///     .initial_kind::<Closed>()
///     .build()
///     .unwrap();
///
/// assert!(machine.is_running());
/// ```
#[derive(Default)]
pub struct StateMachineBuilder {
    config: MachineConfig,
    registry: StateRegistry,
    transitions: Vec<TransitionBuilder>,
    initial: Option<Target>,
}

impl StateMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an existing registry for kind targets.
    pub fn registry(mut self, registry: StateRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register a state instance so transitions can target it by kind.
    pub fn register<S: State>(mut self, state: Rc<RefCell<S>>) -> Self {
        self.registry.insert(state);
        self
    }

    /// Queue a transition. Validation is deferred to [`build`](Self::build).
    pub fn transition(mut self, builder: TransitionBuilder) -> Self {
        self.transitions.push(builder);
        self
    }

    /// Queue several transitions at once.
    pub fn transitions(mut self, builders: impl IntoIterator<Item = TransitionBuilder>) -> Self {
        self.transitions.extend(builders);
        self
    }

    /// Enter `state` when the machine is built (optional).
    pub fn initial(mut self, state: StateRef) -> Self {
        self.initial = Some(Target::State(state));
        self
    }

    /// Enter the registered instance of `S` when the machine is built.
    pub fn initial_kind<S: State>(mut self) -> Self {
        self.initial = Some(Target::Kind(StateKind::of::<S>()));
        self
    }

    /// Check every queued transition and the initial state, accumulating all
    /// problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = self
            .transitions
            .iter()
            .map(|builder| builder.validate(&self.registry))
            .collect();

        if let Some(initial) = &self.initial {
            checks.push(initial.check(&self.registry));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine, entering the initial state if one was given.
    pub fn build(self) -> Result<StateMachine, BuildErrors> {
        self.build_with_registry().map(|(machine, _)| machine)
    }

    /// Build the machine and hand back the registry it resolved against.
    pub fn build_with_registry(self) -> Result<(StateMachine, StateRegistry), BuildErrors> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildErrors(errors.iter().cloned().collect()));
        }

        let Self {
            config,
            registry,
            transitions,
            initial,
        } = self;

        let mut machine = StateMachine::with_config(config);
        for builder in transitions {
            let edge = builder
                .build_with(&registry)
                .map_err(|error| BuildErrors(vec![error]))?;
            machine.insert(edge);
        }
        debug!(
            machine = %machine.id(),
            label = %machine.config().label,
            transitions = machine.table().len(),
            states = registry.len(),
            "built state machine"
        );

        if let Some(initial) = initial {
            let state = initial
                .resolve(&registry)
                .map_err(|error| BuildErrors(vec![error]))?;
            machine.initialize(state);
        }

        Ok((machine, registry))
    }
}
