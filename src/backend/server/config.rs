/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables and
 * opens the SQLite store.
 *
 * # Configuration Sources
 *
 * Values come from the process environment (after `.env` is loaded by the
 * binary). The recognized variables are:
 *
 * - `JWT_SECRET` - session token signing secret
 * - `COOKIE_NAME` - session cookie name (default `pc_sid`)
 * - `DATABASE_URL` - store connection string (default `sqlite://plancraft.db?mode=rwc`)
 * - `PORT` - listen port (default `3000`)
 * - `APP_ENV` - `production` enables the `Secure` cookie flag and makes
 *   `JWT_SECRET` mandatory
 *
 * # Error Handling
 *
 * Unlike optional services, the store is required: if it cannot be opened or
 * its schema cannot be created, startup fails.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Default session cookie name
pub const DEFAULT_COOKIE_NAME: &str = "pc_sid";

/// Default store connection string
pub const DEFAULT_DATABASE_URL: &str = "sqlite://plancraft.db?mode=rwc";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// bcrypt work factor used for stored password hashes
pub const PASSWORD_HASH_COST: u32 = 12;

const DEV_JWT_SECRET: &str = "dev-secret";

/// Configuration errors detected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set when APP_ENV=production")]
    MissingSecret,

    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Store connection string
    pub database_url: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Whether the session cookie carries the `Secure` attribute
    pub secure_cookies: bool,
    /// bcrypt cost for new password hashes
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let production = get("APP_ENV")
            .map(|env| env.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if production => return Err(ConfigError::MissingSecret),
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            jwt_secret,
            cookie_name: get("COOKIE_NAME").unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
            secure_cookies: production,
            bcrypt_cost: PASSWORD_HASH_COST,
        })
    }
}

/// Open the store and bring its schema up to date
///
/// # Errors
///
/// Returns the underlying `sqlx` error if the connection string is invalid,
/// the database cannot be opened, or a migration fails.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Apply the bundled schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// In-memory store with the schema applied, for unit tests
///
/// A single connection is kept alive for the lifetime of the pool, since
/// every SQLite `:memory:` connection is its own database.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
