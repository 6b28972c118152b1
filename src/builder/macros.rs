//! Macros for ergonomic state declaration.

/// Declare marker states that only need the default no-op hooks.
///
/// # Example
///
/// ```
/// use tickstate::core::{StateKind, StateRef};
/// use tickstate::unit_states;
///
/// unit_states! {
///     pub struct Red;
///     pub struct Yellow;
///     pub struct Green;
/// }
///
/// let red = StateRef::new(Red);
/// assert_eq!(red.kind(), StateKind::of::<Red>());
/// ```
#[macro_export]
macro_rules! unit_states {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis struct $name:ident;
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            $vis struct $name;

            impl $crate::core::State for $name {}
        )*
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{StateKind, StateRef};

    unit_states! {
        struct Start;
        struct Finish;
    }

    #[test]
    fn unit_states_macro_generates_trait() {
        let start = StateRef::new(Start);
        let finish = StateRef::new(Finish);

        assert_eq!(start.kind(), StateKind::of::<Start>());
        assert_ne!(start.kind(), finish.kind());
        assert_eq!(finish.kind().name(), "Finish");
    }

    #[test]
    fn unit_states_supports_visibility() {
        unit_states! {
            /// Documented marker.
            pub struct PublicState;
        }

        let _state = StateRef::new(PublicState);
    }
}
