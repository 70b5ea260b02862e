//! Error types for list operations.

use crate::types::ToDoId;
use thiserror::Error;

/// Errors from per-item list operations and rejected events
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToDoError {
    /// No item with this id exists in the list
    #[error("Todo {0} not found")]
    NotFound(ToDoId),

    /// A replayed add event does not land at the position its id names
    #[error("Todo {id} out of sequence (next position is {expected})")]
    OutOfSequence {
        /// Id carried by the event
        id: ToDoId,
        /// Id the next added item would receive
        expected: ToDoId,
    },
}
