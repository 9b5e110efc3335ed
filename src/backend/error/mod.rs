//! Backend Error Module
//!
//! This module defines the error taxonomy used by HTTP handlers and the
//! auth gate, and converts it into JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and its internal sources
//! └── conversion.rs - IntoResponse and extractor rejection mapping
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers return
//! `Result<_, ApiError>` and use `?` on store, hashing and token calls.
//! Internal failures are logged with `tracing::error!` and reported to the
//! client as a generic 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, InternalError};
