//! In-memory [`CustomerStore`] for handler and service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use customer_registration_core::{Customer, CustomerId, Email, NewCustomer};

use super::{CustomerStore, RepositoryError};

/// Vector-backed store that mirrors the table's unique-email constraint.
#[derive(Debug, Default)]
pub struct MemoryCustomerStore {
    rows: Mutex<Vec<Customer>>,
    unavailable: AtomicBool,
}

impl MemoryCustomerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Snapshot of all stored rows.
    #[allow(clippy::unwrap_used)]
    pub fn rows(&self) -> Vec<Customer> {
        self.rows.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
#[allow(clippy::unwrap_used)]
impl CustomerStore for MemoryCustomerStore {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        self.check_available()
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
        self.check_available()?;
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|row| row.email == customer.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let next_id = i32::try_from(rows.len()).unwrap() + 1;
        let stored = Customer {
            id: CustomerId::new(next_id),
            name: customer.name.clone(),
            email: customer.email.clone(),
            registered_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, RepositoryError> {
        self.check_available()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| &row.email == email).cloned())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        self.check_available()?;
        Ok(i64::try_from(self.rows.lock().unwrap().len()).unwrap())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_available()
    }
}
