/**
 * PlanCraft Server Entry Point
 *
 * Loads `.env`, configures tracing, reads the configuration from the
 * environment and serves the task board API.
 */

use plancraft::backend::server::{serve, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = Config::from_env()?;
    serve(config).await?;

    Ok(())
}
