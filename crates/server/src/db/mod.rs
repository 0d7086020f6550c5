//! Database operations for the registration `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `customers` - One row per registrant; `email` is unique
//!
//! # Schema
//!
//! The table is created on startup by [`CustomerStore::ensure_schema`] (or
//! ahead of time with `reg-cli init-db`). The statement is idempotent, so
//! running it against an existing database is harmless.

mod customers;
#[cfg(test)]
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use customer_registration_core::{Customer, Email, NewCustomer};

pub use customers::{CREATE_CUSTOMERS_TABLE, PgCustomerStore};

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Persistence seam for customer records.
///
/// The production implementation is [`PgCustomerStore`]; handlers only ever
/// see `dyn CustomerStore`, injected through application state.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Create the backing table if it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;

    /// Insert a customer, returning the stored record with its assigned
    /// `id` and `registered_at`.
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    async fn insert(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError>;

    /// Look a customer up by exact email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, RepositoryError>;

    /// Number of stored customers.
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Round-trip to the store without touching data.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
