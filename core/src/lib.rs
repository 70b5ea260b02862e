//! # Todo List Core
//!
//! Core traits and types for the todo list.
//!
//! The list is driven by the Reducer pattern: every change arrives as an
//! action, a reducer applies it to owned state, and any follow-up work is
//! returned as an [`Effect`](effect::Effect) description for the runtime to
//! execute.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state (the list itself)
//! - **Action**: All possible inputs to a reducer (commands and events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work descriptions (not execution)
//! - **Environment**: Injected dependencies
//!
//! ## Example
//!
//! ```
//! use todo_list_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! struct Tally;
//!
//! impl Reducer for Tally {
//!     type State = u32;
//!     type Action = u32;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut u32,
//!         action: u32,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<u32>; 4]> {
//!         *state += action;
//!         SmallVec::new()
//!     }
//! }
//!
//! let mut total = 0;
//! let effects = Tally.reduce(&mut total, 3, &());
//! assert_eq!(total, 3);
//! assert!(effects.is_empty());
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// Most reducers return zero effects, so the result is kept inline
        /// for up to four effects.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values, not execution. The runtime `Store` walks them after
/// the reducer returns.
pub mod effect {
    /// Effect type - describes follow-up work to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        Dispatch(Box<Action>),

        /// Run effects one after another, in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Wrap an action to be fed back into the reducer
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Returns `true` if executing this effect does nothing
        ///
        /// An empty `Sequential` counts as a no-op.
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Dispatch(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Collects every dispatched action, depth-first in execution order
        #[must_use]
        pub fn dispatched(&self) -> Vec<&Action> {
            let mut out = Vec::new();
            self.collect_dispatched(&mut out);
            out
        }

        fn collect_dispatched<'a>(&'a self, out: &mut Vec<&'a Action>) {
            match self {
                Self::None => {},
                Self::Dispatch(action) => out.push(action),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_dispatched(out);
                    }
                },
            }
        }
    }
}
