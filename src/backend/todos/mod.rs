//! Todos Module
//!
//! The task board API: ownership-scoped persistence for tasks and the HTTP
//! handlers that expose it.
//!
//! - **`types`** - Request bodies (create, partial patch, reorder batch)
//! - **`db`** - Queries against the `todos` table, always filtered by owner
//! - **`handlers`** - `/api/todos` endpoints, all behind the auth gate

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{create_todo, delete_todo, list_todos, reorder_todos, update_todo};
