/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is built once at startup and cloned into every
 * handler. It holds:
 * - The SQLite connection pool (the only persistent resource)
 * - The session token signer/verifier
 * - The session cookie settings
 * - The bcrypt cost for new password hashes
 *
 * There is no in-process mutable state; everything shared across requests
 * lives in the store.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only what they need,
 * e.g. `State(pool): State<SqlitePool>`, following Axum's recommended pattern.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::cookies::SessionCookie;
use crate::backend::auth::sessions::SessionTokens;
use crate::backend::server::config::Config;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Session token service
    pub session_tokens: SessionTokens,

    /// Session cookie name and attributes
    pub session_cookie: SessionCookie,

    /// bcrypt cost applied on signup
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build the state from a configuration and an open pool
    pub fn new(config: &Config, db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            session_tokens: SessionTokens::new(&config.jwt_secret),
            session_cookie: SessionCookie::new(config.cookie_name.clone(), config.secure_cookies),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionTokens {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_tokens.clone()
    }
}

impl FromRef<AppState> for SessionCookie {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_cookie.clone()
    }
}
