//! # Todo List Runtime
//!
//! Runtime implementation for the todo list reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state and executes effects
//! - **Effect Executor**: Walks effect descriptions and feeds dispatched actions back to the reducer
//! - **Feedback Loop**: action → reducer → effects → action, bounded by [`StoreConfig`]
//!
//! Everything runs on the caller's thread. `send` returns once the feedback
//! loop has drained.
//!
//! ## Example
//!
//! ```ignore
//! use todo_list_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use todo_list_core::{effect::Effect, reducer::Reducer};

/// Store metrics for observability
pub mod metrics;

use crate::metrics::StoreMetrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// The feedback loop dispatched more actions than allowed
        ///
        /// State keeps every change reduced before the limit was hit.
        #[error("Feedback loop exceeded {0} dispatched actions")]
        FeedbackLimitExceeded(usize),
    }
}

pub use error::StoreError;

/// Store configuration
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::default().with_max_feedback_actions(64);
/// let store = Store::with_config(state, reducer, env, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of dispatched actions a single `send` may reduce
    /// after the initial one
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Default feedback limit
    pub const DEFAULT_MAX_FEEDBACK_ACTIONS: usize = 1024;

    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FEEDBACK_ACTIONS)
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Effect, Instant, Reducer, StoreConfig, StoreError, StoreMetrics, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned, mutated only by the reducer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    #[derive(Debug)]
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
            }
        }

        /// The active configuration
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// The action is reduced, then its effects are executed in order.
        /// Actions dispatched by effects are queued and reduced FIFO until
        /// the queue is empty.
        ///
        /// Returns the number of actions reduced, the initial one included.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects keep
        /// dispatching past [`StoreConfig::max_feedback_actions`]. The
        /// remaining queue is dropped.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<usize, StoreError> {
            tracing::debug!("Processing action");

            let mut queue = VecDeque::from([action]);
            let mut reduced = 0usize;

            while let Some(action) = queue.pop_front() {
                if reduced > self.config.max_feedback_actions {
                    tracing::warn!(
                        limit = self.config.max_feedback_actions,
                        dropped = queue.len() + 1,
                        "Feedback limit exceeded, dropping queued actions"
                    );
                    StoreMetrics::record_feedback_limit();
                    return Err(StoreError::FeedbackLimitExceeded(
                        self.config.max_feedback_actions,
                    ));
                }

                let start = Instant::now();
                let effects = self
                    .reducer
                    .reduce(&mut self.state, action, &self.environment);
                StoreMetrics::record_action(start.elapsed());
                reduced += 1;

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                for effect in effects {
                    Self::execute_effect(effect, &mut queue);
                }
            }

            tracing::debug!(reduced, "Action processing completed");
            Ok(reduced)
        }

        fn execute_effect(effect: Effect<A>, queue: &mut VecDeque<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    StoreMetrics::record_effect("none");
                },
                Effect::Dispatch(action) => {
                    tracing::trace!("Executing Effect::Dispatch, queueing action");
                    StoreMetrics::record_effect("dispatch");
                    queue.push_back(*action);
                },
                Effect::Sequential(effects) => {
                    tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                    StoreMetrics::record_effect("sequential");
                    for effect in effects {
                        Self::execute_effect(effect, queue);
                    }
                },
            }
        }

        /// Read current state via a closure
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }
}

pub use store::Store;
