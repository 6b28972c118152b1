//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State, StateKind, StateRef, StateRegistry, Transition, TransitionSource};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A transition together with where it is evaluated from.
#[derive(Clone, Debug)]
pub struct Edge {
    pub source: TransitionSource,
    pub transition: Transition,
}

/// Target named either by instance or by registered kind.
#[derive(Clone, Debug)]
pub(crate) enum Target {
    State(StateRef),
    Kind(StateKind),
}

impl Target {
    pub(crate) fn resolve(self, registry: &StateRegistry) -> Result<StateRef, BuildError> {
        match self {
            Target::State(state) => Ok(state),
            Target::Kind(kind) => registry.resolve(kind),
        }
    }

    pub(crate) fn check(&self, registry: &StateRegistry) -> Validation<(), NonEmptyVec<BuildError>> {
        match self {
            Target::Kind(kind) if !registry.contains(*kind) => {
                Validation::fail(BuildError::UnregisteredState { name: kind.name() })
            }
            _ => Validation::success(()),
        }
    }
}

/// Builder for constructing transitions with a fluent API.
///
/// Source, target and guard are all required. [`validate`](Self::validate)
/// reports every missing piece at once; [`build`](Self::build) stops at the
/// first one.
///
/// # Example
///
/// ```rust
/// use tickstate::builder::TransitionBuilder;
/// use tickstate::core::{State, StateRef, TransitionSource, StateKind};
///
/// struct Patrol;
/// impl State for Patrol {}
///
/// struct Flee;
/// impl State for Flee {}
///
/// let edge = TransitionBuilder::new()
///     .from::<Patrol>()
///     .to(StateRef::new(Flee))
///     .when(|| true)
///     .build()
///     .unwrap();
///
/// assert_eq!(edge.source, TransitionSource::Kind(StateKind::of::<Patrol>()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    source: Option<TransitionSource>,
    target: Option<Target>,
    guard: Option<Guard>,
}

impl TransitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate while a state of type `S` is current.
    pub fn from<S: State>(self) -> Self {
        self.from_kind(StateKind::of::<S>())
    }

    pub fn from_kind(mut self, kind: StateKind) -> Self {
        self.source = Some(TransitionSource::Kind(kind));
        self
    }

    /// Evaluate from every state, ahead of scoped transitions.
    pub fn from_any(mut self) -> Self {
        self.source = Some(TransitionSource::Any);
        self
    }

    pub fn to(mut self, state: StateRef) -> Self {
        self.target = Some(Target::State(state));
        self
    }

    /// Target the registered instance of `S`, resolved when the machine is
    /// built.
    pub fn to_kind<S: State>(mut self) -> Self {
        self.target = Some(Target::Kind(StateKind::of::<S>()));
        self
    }

    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Guard with a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Unconditional transition.
    pub fn always(self) -> Self {
        self.guard(Guard::always())
    }

    /// Check every required field, accumulating all problems.
    pub fn validate(&self, registry: &StateRegistry) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        checks.push(match self.source {
            Some(_) => Validation::success(()),
            None => Validation::fail(BuildError::MissingSource),
        });

        checks.push(match &self.target {
            Some(target) => target.check(registry),
            None => Validation::fail(BuildError::MissingTarget),
        });

        checks.push(match self.guard {
            Some(_) => Validation::success(()),
            None => Validation::fail(BuildError::MissingGuard),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build, failing on the first missing field. Kind targets cannot be
    /// resolved without a registry; use [`build_with`](Self::build_with).
    pub fn build(self) -> Result<Edge, BuildError> {
        self.build_with(&StateRegistry::new())
    }

    /// Build, resolving kind targets against `registry`.
    pub fn build_with(self, registry: &StateRegistry) -> Result<Edge, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;
        let target = target.resolve(registry)?;

        Ok(Edge {
            source,
            transition: Transition::new(target, guard),
        })
    }
}
