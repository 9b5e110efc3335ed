//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! management.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - bcrypt hashing off the async executor
//! - **`sessions`** - Signed session tokens (HS256, 7-day expiry)
//! - **`cookies`** - The HttpOnly cookie that carries the session token
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Token management
//! ├── cookies.rs      - Session cookie attributes
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and cannot be revoked before expiry
//! - Invalid credentials return 401 without revealing which part was wrong

pub mod users;

pub mod password;

pub mod sessions;

pub mod cookies;

pub mod handlers;

pub use handlers::{get_me, login, logout, signup};
