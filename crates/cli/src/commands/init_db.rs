//! Schema initialization command.
//!
//! # Usage
//!
//! ```bash
//! reg-cli init-db
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//!
//! Runs the same idempotent `CREATE TABLE IF NOT EXISTS` the server runs on
//! startup, so the table can be provisioned before the first deploy.

use customer_registration_server::config::{ConfigError, ServerConfig};
use customer_registration_server::db::{self, CustomerStore, PgCustomerStore, RepositoryError};

/// Errors from `reg-cli init-db`.
#[derive(Debug, thiserror::Error)]
pub enum InitDbError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] RepositoryError),
}

/// Create the `customers` table if it is missing.
///
/// # Errors
///
/// Returns `InitDbError` if configuration is missing, the database is
/// unreachable, or the DDL fails.
pub async fn run() -> Result<(), InitDbError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to registration database...");
    let pool = db::create_pool(&config.database_url, 1).await?;

    tracing::info!("Ensuring customer table exists...");
    PgCustomerStore::new(pool).ensure_schema().await?;

    tracing::info!("Customer table ready");
    Ok(())
}
