//! CLI demo for the todo list.
//!
//! Walks four scenarios through the store and prints each view. Set
//! `RUST_LOG=debug` to see the reducer and store at work.

use todo_list::{ToDoAction, ToDoEnvironment, ToDoId, ToDoList, ToDoReducer};
use todo_list_runtime::{Store, metrics};
use tracing_subscriber::EnvFilter;

type ToDoStore = Store<ToDoList, ToDoAction, ToDoEnvironment, ToDoReducer>;

fn store_with(descriptions: &[&str]) -> anyhow::Result<ToDoStore> {
    let mut store = Store::new(ToDoList::new(), ToDoReducer::new(), ToDoEnvironment::new());
    for description in descriptions {
        store.send(ToDoAction::Add {
            description: (*description).to_string(),
        })?;
    }
    Ok(store)
}

fn complete(store: &mut ToDoStore, indices: &[usize]) -> anyhow::Result<()> {
    for index in indices {
        store.send(ToDoAction::MarkComplete {
            id: ToDoId::from_index(*index),
        })?;
    }
    Ok(())
}

fn print_views(list: &ToDoList) {
    for (id, todo) in list.iter() {
        let status = if todo.is_complete() { "✓" } else { " " };
        println!("  {id} [{status}] {}", todo.description());
    }
    println!("  all:        {:?}", list.all_todos());
    println!("  complete:   {:?}", list.complete());
    println!("  incomplete: {:?}", list.incomplete());
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    metrics::describe_metrics();

    println!("=== Todo List ===");

    println!("\n1. Adding two todos");
    let store = store_with(&["Wash the dishes", "Mow the lawn"])?;
    store.state(print_views);

    println!("\n2. Completing the first and third of three");
    let mut store = store_with(&["Wash the dishes", "Mow the lawn", "Feed the cat"])?;
    complete(&mut store, &[0, 2])?;
    store.state(print_views);

    println!("\n3. Completing only the first of three");
    let mut store = store_with(&["Wash the dishes", "Mow the lawn", "Feed the cat"])?;
    complete(&mut store, &[0])?;
    store.state(print_views);

    println!("\n4. Giving up on two todos");
    let mut store = store_with(&["Wash the dishes", "Mow the lawn"])?;
    store.send(ToDoAction::GiveUp)?;
    store.state(print_views);

    let list = store.into_state();
    println!("\nFinal list:\n{}", serde_json::to_string_pretty(&list)?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
