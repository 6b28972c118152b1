//! Build errors for transition and machine builders.

use thiserror::Error;

/// Problems found while building a transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Transition source not specified. Call .from::<S>(), .from_kind(kind) or .from_any()")]
    MissingSource,

    #[error("Transition target not specified. Call .to(state) or .to_kind::<S>()")]
    MissingTarget,

    #[error("Transition guard not specified. Call .when(predicate), .guard(guard) or .always()")]
    MissingGuard,

    #[error("State '{name}' is not registered")]
    UnregisteredState { name: &'static str },
}

/// Every problem found while building a machine, in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid definition(s): {}", .0.len(), summarize(.0))]
pub struct BuildErrors(pub Vec<BuildError>);

impl BuildErrors {
    pub fn iter(&self) -> impl Iterator<Item = &BuildError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn summarize(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
