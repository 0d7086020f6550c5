//! Integration tests for customer registration.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and the server
//! export DATABASE_URL=postgres://localhost/customer_registration
//! cargo run -p customer-registration-server &
//!
//! # Run the ignored integration tests
//! cargo test -p customer-registration-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - Database the server writes to (required)
//! - `REGISTRATION_BASE_URL` - Running server (default: `http://127.0.0.1:3001`)
//!
//! Every test uses a fresh email address, so tests can run repeatedly against
//! the same database. Tests that assert on the row count hold [`serial`] so
//! no other test in the same binary inserts while they run.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use customer_registration_server::db::{self, CustomerStore, PgCustomerStore};

static SERIAL: Mutex<()> = Mutex::const_new(());

/// Run the calling test alone among the tests of its binary that also take
/// this guard.
pub async fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().await
}

/// Base URL of the server under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("REGISTRATION_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string())
}

/// Full URL of the registration endpoint.
#[must_use]
pub fn register_url() -> String {
    format!(
        "{}{}",
        base_url(),
        customer_registration_core::api::REGISTER_PATH
    )
}

/// An email address no previous test run has used.
#[must_use]
pub fn unique_email(label: &str) -> String {
    format!("{label}+{}@example.com", Uuid::new_v4())
}

/// Connect to the test database and make sure the table exists.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset or the database is unreachable.
#[allow(clippy::expect_used)]
pub async fn store() -> Arc<PgCustomerStore> {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = db::create_pool(&SecretString::from(url), 5)
        .await
        .expect("Failed to connect to test database");

    let store = PgCustomerStore::new(pool);
    store
        .ensure_schema()
        .await
        .expect("Failed to create customers table");
    Arc::new(store)
}
