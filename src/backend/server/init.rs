/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite store and run migrations
 * 2. Build `AppState` from the configuration and pool
 * 3. Create and configure the router
 * 4. Bind the listener and serve
 *
 * Any failure aborts startup; the store is not optional.
 */

use std::net::SocketAddr;

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, Config};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the application router around an already opened pool
pub fn build_app(config: &Config, db_pool: SqlitePool) -> Router<()> {
    let app_state = AppState::new(config, db_pool);
    create_router(app_state)
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `InitError::Database` if the store cannot be opened or migrated.
pub async fn create_app(config: &Config) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing PlanCraft backend server");

    // Step 1: Open the store (migrations included)
    let db_pool = load_database(&config.database_url).await?;

    // Step 2: Create state and router
    let app = build_app(config, db_pool);

    tracing::info!("Router configured");

    Ok(app)
}

/// Create the app, bind `0.0.0.0:{config.port}` and serve until the process exits
pub async fn serve(config: Config) -> Result<(), InitError> {
    let app = create_app(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| InitError::Bind { addr, source })?;

    tracing::info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app).await.map_err(InitError::Serve)
}
