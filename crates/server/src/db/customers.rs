//! `PostgreSQL` implementation of [`CustomerStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use customer_registration_core::{Customer, Email, NewCustomer};

use super::{CustomerStore, RepositoryError};

/// Idempotent DDL for the `customers` table.
pub const CREATE_CUSTOMERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        id            SERIAL PRIMARY KEY,
        name          TEXT NOT NULL,
        email         TEXT NOT NULL UNIQUE,
        registered_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

/// Customer store backed by a `PgPool`.
#[derive(Debug, Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    #[instrument(skip(self))]
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_CUSTOMERS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, customer), fields(email = %customer.email))]
    async fn insert(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
        sqlx::query_as::<_, Customer>(
            r"
            INSERT INTO customers (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, registered_at
            ",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, email, registered_at
            FROM customers
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
