//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie removal
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Clear the session cookie
//! - **`get_me`** - GET /api/auth/me - Get current user info (gated)
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email and password → user created → session cookie set
//! 2. **Login**: email and password → credentials verified → session cookie set
//! 3. **Get Me**: session cookie → token verified by the gate → user info returned
//! 4. **Logout**: session cookie cleared

pub mod types;

pub mod signup;

pub mod login;

pub mod logout;

pub mod me;

pub use types::{LoginRequest, MessageResponse, SignupRequest};

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
