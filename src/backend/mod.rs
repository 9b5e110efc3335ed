//! Backend Module
//!
//! This module contains all server-side code for PlanCraft: an Axum HTTP
//! server exposing account and task board endpoints over a SQLite store.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, session tokens and cookies
//! - **`middleware`** - The auth gate for session-only routes
//! - **`todos`** - Task persistence and endpoints, scoped to the owner
//! - **`error`** - HTTP-facing error type and its JSON rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── todos/          - Task board
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Every error reaches the client as
//! `{"message": ...}` with the matching status; internal failures are logged
//! and reported only as `Internal Server Error`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Task board persistence and handlers
pub mod todos;

pub use error::ApiError;
pub use server::{create_app, AppState, Config};
