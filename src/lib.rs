//! PlanCraft - Main Library
//!
//! PlanCraft is a personal kanban board backend. Users sign up, log in with a
//! session cookie, and keep a private list of tasks that move between the
//! `todo`, `progress` and `done` columns.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types returned by the API (`Task`, `TaskStatus`,
//!   `UserProfile`) and the normalization helpers used on input
//!
//! - **`backend`** - The Axum server
//!   - Auth endpoints and the session cookie gate
//!   - Ownership-scoped task endpoints, including bulk reorder
//!   - SQLite persistence through `sqlx`
//!   - Static file serving for the browser client
//!
//! # Usage
//!
//! ```rust,no_run
//! use plancraft::backend::server::{create_app, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `backend::error::ApiError` for everything a handler can report
//! - `backend::server::ConfigError` and `backend::server::InitError` for startup

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
