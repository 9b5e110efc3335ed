//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, static files, 404, layers
//! └── api_routes.rs   - Auth and todo endpoints, auth gate
//! ```
//!
//! # Route Organization
//!
//! 1. **Public API Routes** - signup, login, logout
//! 2. **Gated API Routes** - `/api/auth/me` and every `/api/todos` route
//! 3. **Static Files** - the browser client from `public/`
//! 4. **Fallback** - `404 {"message":"Not Found"}`

pub mod api_routes;
pub mod router;

pub use router::{create_router, create_router_with_static};
