//! A small to-do list model.
//!
//! A [`ToDoList`] owns an ordered sequence of [`ToDo`] items and answers
//! three queries: every description, the completed ones, and the open ones.
//! Items can be completed one at a time, reopened, or all at once with
//! [`ToDoList::give_up`].
//!
//! The same operations are available as [`ToDoAction`] commands for the
//! [`ToDoReducer`], so the list can be driven through a `Store`.
//!
//! # Quick Start
//!
//! ```
//! use todo_list::{ToDo, ToDoList};
//!
//! let mut list = ToDoList::new();
//! let wash = list.add(ToDo::new("Wash the dishes"));
//! list.add(ToDo::new("Mow the lawn"));
//!
//! list.mark_complete(wash)?;
//! assert_eq!(list.complete(), vec!["Wash the dishes"]);
//! assert_eq!(list.incomplete(), vec!["Mow the lawn"]);
//!
//! list.give_up();
//! assert!(list.incomplete().is_empty());
//! # Ok::<(), todo_list::ToDoError>(())
//! ```
//!
//! Through the store:
//!
//! ```
//! use todo_list::{ToDoAction, ToDoEnvironment, ToDoList, ToDoReducer};
//! use todo_list_runtime::Store;
//!
//! let mut store = Store::new(ToDoList::new(), ToDoReducer::new(), ToDoEnvironment::new());
//! store.send(ToDoAction::Add { description: "Feed the cat".to_string() })?;
//! store.send(ToDoAction::GiveUp)?;
//!
//! assert_eq!(store.state(|list| list.completed_count()), 1);
//! # Ok::<(), todo_list_runtime::StoreError>(())
//! ```

pub mod error;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use error::ToDoError;
pub use reducer::{ToDoEnvironment, ToDoReducer};
pub use types::{ToDo, ToDoAction, ToDoId, ToDoList};
