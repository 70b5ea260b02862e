//! # Todo List Testing
//!
//! Testing utilities and helpers for the todo list.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers for effects
//! - Tracing setup for tests
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use todo_list_testing::{ReducerTest, assertions};
//!
//! #[test]
//! fn adds_item() {
//!     ReducerTest::new(ToDoReducer::new())
//!         .with_env(ToDoEnvironment::new())
//!         .given_state(ToDoList::new())
//!         .when_action(ToDoAction::Add { description: "Feed the cat".into() })
//!         .then_state(|list| assert_eq!(list.len(), 1))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Install a test-friendly tracing subscriber
///
/// Output goes through the libtest capture writer and honours `RUST_LOG`.
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Arbitrary task descriptions, empty and duplicate text included
    pub fn description() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("Wash the dishes".to_string()),
            Just("Mow the lawn".to_string()),
            Just("Feed the cat".to_string()),
            "[a-zA-Z0-9 ]{1,24}",
        ]
    }

    /// Descriptions paired with a completion flag, up to `max_len` items
    pub fn descriptions_with_flags(max_len: usize) -> impl Strategy<Value = Vec<(String, bool)>> {
        prop::collection::vec((description(), any::<bool>()), 0..=max_len)
    }
}
