//! Reducer logic for the todo list.
//!
//! Commands are validated, turned into events, and the events applied to the
//! list. `GiveUp` applies one `ToDoCompleted` event per open task within a
//! single reduction, so it never goes through the store's feedback loop.

use crate::error::ToDoError;
use crate::types::{ToDo, ToDoAction, ToDoId, ToDoList};
use todo_list_core::{SmallVec, effect::Effect, reducer::Reducer};

/// Environment dependencies for the todo reducer
///
/// The list needs no injected services yet.
#[derive(Clone, Debug, Default)]
pub struct ToDoEnvironment;

impl ToDoEnvironment {
    /// Creates a new `ToDoEnvironment`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct ToDoReducer;

impl ToDoReducer {
    /// Creates a new `ToDoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a command that targets a single task
    fn validate_target(state: &ToDoList, id: ToDoId) -> Result<(), ToDoError> {
        if state.exists(id) {
            Ok(())
        } else {
            Err(ToDoError::NotFound(id))
        }
    }

    /// Applies an event to state
    fn apply_event(state: &mut ToDoList, action: &ToDoAction) {
        match action {
            ToDoAction::ToDoAdded { id, description } => {
                let expected = state.next_id();
                if *id == expected {
                    state.add(ToDo::new(description.clone()));
                    state.last_error = None;
                } else {
                    let error = ToDoError::OutOfSequence { id: *id, expected };
                    tracing::warn!(%error, "Rejected event");
                    state.last_error = Some(error.to_string());
                }
            },
            ToDoAction::ToDoCompleted { id } => {
                state.last_error = state.mark_complete(*id).err().map(|e| e.to_string());
            },
            ToDoAction::ToDoReopened { id } => {
                state.last_error = state.mark_incomplete(*id).err().map(|e| e.to_string());
            },
            ToDoAction::ValidationFailed { error } => {
                state.last_error = Some(error.clone());
            },
            // Commands are not applied to state
            ToDoAction::Add { .. }
            | ToDoAction::MarkComplete { .. }
            | ToDoAction::MarkIncomplete { .. }
            | ToDoAction::GiveUp => {},
        }
    }

    /// Validates a single-task command and applies the resulting event
    fn handle_targeted(state: &mut ToDoList, id: ToDoId, event: ToDoAction) {
        let event = match Self::validate_target(state, id) {
            Ok(()) => event,
            Err(error) => {
                tracing::warn!(%id, %error, "Rejected command");
                ToDoAction::ValidationFailed {
                    error: error.to_string(),
                }
            },
        };
        Self::apply_event(state, &event);
    }
}

impl Default for ToDoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for ToDoReducer {
    type State = ToDoList;
    type Action = ToDoAction;
    type Environment = ToDoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            ToDoAction::Add { description } => {
                let event = ToDoAction::ToDoAdded {
                    id: state.next_id(),
                    description,
                };
                tracing::debug!(?event, "Adding todo");
                Self::apply_event(state, &event);
                SmallVec::new()
            },

            ToDoAction::MarkComplete { id } => {
                Self::handle_targeted(state, id, ToDoAction::ToDoCompleted { id });
                SmallVec::new()
            },

            ToDoAction::MarkIncomplete { id } => {
                Self::handle_targeted(state, id, ToDoAction::ToDoReopened { id });
                SmallVec::new()
            },

            ToDoAction::GiveUp => {
                let open = state.incomplete_ids();
                tracing::debug!(open = open.len(), "Giving up on remaining todos");

                // Ids come from the list itself, so every event applies
                for id in open {
                    Self::apply_event(state, &ToDoAction::ToDoCompleted { id });
                }
                state.last_error = None;
                SmallVec::new()
            },

            // ========== Events ==========
            ToDoAction::ToDoAdded { .. }
            | ToDoAction::ToDoCompleted { .. }
            | ToDoAction::ToDoReopened { .. }
            | ToDoAction::ValidationFailed { .. } => {
                // Replayed events are applied as-is
                Self::apply_event(state, &action);
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_list_testing::{ReducerTest, assertions};

    fn list_of(descriptions: &[&str]) -> ToDoList {
        let mut list = ToDoList::new();
        for description in descriptions {
            list.add(ToDo::new(*description));
        }
        list
    }

    fn id(index: usize) -> ToDoId {
        ToDoId::from_index(index)
    }

    #[test]
    fn test_add_todo() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(ToDoList::new())
            .when_action(ToDoAction::Add {
                description: "Wash the dishes".to_string(),
            })
            .when_action(ToDoAction::Add {
                description: "Mow the lawn".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.all_todos(), vec!["Wash the dishes", "Mow the lawn"]);
                assert_eq!(state.incomplete().len(), 2);
                assert!(state.last_error.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_accepts_empty_description() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(ToDoList::new())
            .when_action(ToDoAction::Add {
                description: String::new(),
            })
            .then_state(|state| {
                assert_eq!(state.all_todos(), vec![""]);
                assert!(state.last_error.is_none());
            })
            .run();
    }

    #[test]
    fn test_mark_complete() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(list_of(&["Wash the dishes", "Mow the lawn", "Feed the cat"]))
            .when_action(ToDoAction::MarkComplete { id: id(0) })
            .when_action(ToDoAction::MarkComplete { id: id(2) })
            .then_state(|state| {
                assert_eq!(state.complete(), vec!["Wash the dishes", "Feed the cat"]);
                assert_eq!(state.incomplete(), vec!["Mow the lawn"]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_mark_complete_twice_is_accepted() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(list_of(&["Mow the lawn"]))
            .when_action(ToDoAction::MarkComplete { id: id(0) })
            .when_action(ToDoAction::MarkComplete { id: id(0) })
            .then_state(|state| {
                assert_eq!(state.complete(), vec!["Mow the lawn"]);
                assert!(state.last_error.is_none());
            })
            .run();
    }

    #[test]
    fn test_mark_complete_not_found() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(list_of(&["Mow the lawn"]))
            .when_action(ToDoAction::MarkComplete { id: id(3) })
            .then_state(|state| {
                assert_eq!(state.completed_count(), 0);
                assert!(state.last_error.as_ref().unwrap().contains("not found"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_mark_incomplete() {
        let mut given = list_of(&["Wash the dishes", "Mow the lawn"]);
        given.give_up();

        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(given)
            .when_action(ToDoAction::MarkIncomplete { id: id(1) })
            .then_state(|state| {
                assert_eq!(state.complete(), vec!["Wash the dishes"]);
                assert_eq!(state.incomplete(), vec!["Mow the lawn"]);
            })
            .run();
    }

    #[test]
    fn test_successful_command_clears_last_error() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(list_of(&["Feed the cat"]))
            .when_action(ToDoAction::MarkIncomplete { id: id(9) })
            .when_action(ToDoAction::MarkComplete { id: id(0) })
            .then_state(|state| {
                assert!(state.last_error.is_none());
                assert_eq!(state.complete(), vec!["Feed the cat"]);
            })
            .run();
    }

    #[test]
    fn test_give_up_completes_open_todos() {
        let mut given = list_of(&["Wash the dishes", "Mow the lawn", "Feed the cat"]);
        given.mark_complete(id(1)).unwrap();
        given.last_error = Some("stale".to_string());

        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(given)
            .when_action(ToDoAction::GiveUp)
            .then_state(|state| {
                assert_eq!(
                    state.complete(),
                    vec!["Wash the dishes", "Mow the lawn", "Feed the cat"]
                );
                assert!(state.incomplete().is_empty());
                assert!(state.last_error.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_give_up_on_empty_list() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(ToDoList::new())
            .when_action(ToDoAction::GiveUp)
            .then_state(|state| assert!(state.is_empty()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_event_application() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(ToDoList::new())
            .when_action(ToDoAction::ToDoAdded {
                id: id(0),
                description: "Test".to_string(),
            })
            .when_action(ToDoAction::ToDoCompleted { id: id(0) })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                let todo = state.get(id(0)).unwrap();
                assert_eq!(todo.description(), "Test");
                assert!(todo.is_complete());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_out_of_sequence_add_event_is_rejected() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(ToDoList::new())
            .when_action(ToDoAction::ToDoAdded {
                id: id(5),
                description: "x".to_string(),
            })
            .then_state(|state| {
                assert!(state.is_empty());
                assert_eq!(
                    state.last_error.as_deref(),
                    Some("Todo #5 out of sequence (next position is #0)")
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_replay_continues_after_rejected_add_event() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(list_of(&["Wash the dishes"]))
            .when_action(ToDoAction::ToDoAdded {
                id: id(0),
                description: "duplicate position".to_string(),
            })
            .when_action(ToDoAction::ToDoAdded {
                id: id(1),
                description: "Mow the lawn".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.all_todos(), vec!["Wash the dishes", "Mow the lawn"]);
                assert!(state.last_error.is_none());
            })
            .run();
    }

    #[test]
    fn test_validation_failed_event_sets_error() {
        ReducerTest::new(ToDoReducer::new())
            .with_env(ToDoEnvironment::new())
            .given_state(ToDoList::new())
            .when_action(ToDoAction::ValidationFailed {
                error: "boom".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.last_error.as_deref(), Some("boom"));
            })
            .run();
    }
}
