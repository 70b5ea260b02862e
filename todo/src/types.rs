//! Domain types for the todo list.
//!
//! A [`ToDoList`] owns its [`ToDo`] items in insertion order. Items are never
//! removed or reordered, so the position an item was added at doubles as its
//! [`ToDoId`].

use crate::error::ToDoError;
use serde::{Deserialize, Serialize};

/// Identifier for an item within one list
///
/// This is the item's insertion position and is only meaningful for the
/// list that handed it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToDoId(usize);

impl ToDoId {
    /// Creates a `ToDoId` from an insertion position
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the insertion position
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ToDoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single task
///
/// The description is fixed at construction. Any text is accepted, the empty
/// string included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDo {
    description: String,
    is_complete: bool,
}

impl ToDo {
    /// Creates a new, incomplete task
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            is_complete: false,
        }
    }

    /// The task text
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task is complete
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Marks the task as complete. Calling it again changes nothing.
    pub const fn mark_complete(&mut self) {
        self.is_complete = true;
    }

    /// Marks the task as incomplete again
    pub const fn mark_incomplete(&mut self) {
        self.is_complete = false;
    }
}

/// An ordered collection of tasks
///
/// Insertion order is preserved and duplicates are allowed. Queries are
/// computed on every call.
///
/// Equality covers `last_error` as well as the items, so two lists holding
/// the same tasks differ while one still reports a rejected command. Use
/// [`ToDoList::same_items`] to compare tasks only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoList {
    items: Vec<ToDo>,
    /// Last validation error from a rejected command or event (if any)
    pub last_error: Option<String>,
}

impl ToDoList {
    /// Creates a new empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            last_error: None,
        }
    }

    /// Appends a task and returns its id
    pub fn add(&mut self, todo: ToDo) -> ToDoId {
        let id = self.next_id();
        self.items.push(todo);
        id
    }

    /// The id the next added task will receive
    #[must_use]
    pub fn next_id(&self) -> ToDoId {
        ToDoId::from_index(self.items.len())
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.is_complete()).count()
    }

    /// Returns `true` if both lists hold equal tasks in the same order,
    /// regardless of `last_error`
    #[must_use]
    pub fn same_items(&self, other: &Self) -> bool {
        self.items == other.items
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: ToDoId) -> Option<&ToDo> {
        self.items.get(id.index())
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: ToDoId) -> bool {
        id.index() < self.items.len()
    }

    /// Iterates over `(id, task)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ToDoId, &ToDo)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, todo)| (ToDoId::from_index(index), todo))
    }

    /// Descriptions of every task, in insertion order
    #[must_use]
    pub fn all_todos(&self) -> Vec<&str> {
        self.items.iter().map(ToDo::description).collect()
    }

    /// Descriptions of completed tasks, in insertion order
    #[must_use]
    pub fn complete(&self) -> Vec<&str> {
        self.descriptions_where(true)
    }

    /// Descriptions of tasks not yet completed, in insertion order
    #[must_use]
    pub fn incomplete(&self) -> Vec<&str> {
        self.descriptions_where(false)
    }

    fn descriptions_where(&self, is_complete: bool) -> Vec<&str> {
        self.items
            .iter()
            .filter(|t| t.is_complete() == is_complete)
            .map(ToDo::description)
            .collect()
    }

    /// Ids of tasks not yet completed, in insertion order
    #[must_use]
    pub fn incomplete_ids(&self) -> Vec<ToDoId> {
        self.iter()
            .filter(|(_, t)| !t.is_complete())
            .map(|(id, _)| id)
            .collect()
    }

    /// Marks one task as complete
    ///
    /// # Errors
    ///
    /// Returns [`ToDoError::NotFound`] if `id` is not in this list.
    pub fn mark_complete(&mut self, id: ToDoId) -> Result<(), ToDoError> {
        self.get_mut(id)?.mark_complete();
        Ok(())
    }

    /// Marks one task as incomplete
    ///
    /// # Errors
    ///
    /// Returns [`ToDoError::NotFound`] if `id` is not in this list.
    pub fn mark_incomplete(&mut self, id: ToDoId) -> Result<(), ToDoError> {
        self.get_mut(id)?.mark_incomplete();
        Ok(())
    }

    /// Marks every task as complete. Does nothing on an empty list.
    pub fn give_up(&mut self) {
        for todo in &mut self.items {
            todo.mark_complete();
        }
    }

    fn get_mut(&mut self, id: ToDoId) -> Result<&mut ToDo, ToDoError> {
        self.items
            .get_mut(id.index())
            .ok_or(ToDoError::NotFound(id))
    }
}

/// Actions representing commands and events for the list
///
/// Commands are validated by the reducer and produce events. Events are
/// applied directly, so a recorded event stream replays into the same list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToDoAction {
    // ========== Commands ==========
    /// Command: Add a new task
    Add {
        /// Task text
        description: String,
    },

    /// Command: Mark a task as complete
    MarkComplete {
        /// Task to complete
        id: ToDoId,
    },

    /// Command: Mark a task as incomplete
    MarkIncomplete {
        /// Task to reopen
        id: ToDoId,
    },

    /// Command: Complete every task still open
    GiveUp,

    // ========== Events ==========
    /// Event: Task was added
    ToDoAdded {
        /// Task identifier
        id: ToDoId,
        /// Task text
        description: String,
    },

    /// Event: Task was completed
    ToDoCompleted {
        /// Task identifier
        id: ToDoId,
    },

    /// Event: Task was marked incomplete
    ToDoReopened {
        /// Task identifier
        id: ToDoId,
    },

    /// Event: Command validation failed
    ValidationFailed {
        /// Error message
        error: String,
    },
}

impl ToDoAction {
    /// Returns `true` for commands
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::MarkComplete { .. } | Self::MarkIncomplete { .. } | Self::GiveUp
        )
    }

    /// Returns `true` for events
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }
}
