//! Shared Module
//!
//! This module contains the JSON data structures exchanged with the board
//! client. They carry no server-side concerns (no database handles, no
//! secrets), so any Rust consumer of the API can depend on them as well.
//!
//! # Overview
//!
//! - **`task`** - `Task` records and the `TaskStatus` board column
//! - **`user`** - `UserProfile`, the public projection of an account

/// Task data structures
pub mod task;

/// Public user projection
pub mod user;

/// Re-export commonly used types for convenience
pub use task::{Task, TaskStatus, ParseStatusError};
pub use user::UserProfile;
