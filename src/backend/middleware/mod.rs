//! Middleware Module
//!
//! HTTP middleware applied before handlers run.
//!
//! - **`auth`** - the auth gate: session cookie → verified user id in the
//!   request extensions, plus the `AuthUser` extractor handlers use to read it
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use plancraft::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/api/todos", get(list_todos))
//!     .route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
