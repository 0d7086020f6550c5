//! `PgCustomerStore` against a real `PostgreSQL` database.
//!
//! Requires `DATABASE_URL`. Run with:
//! cargo test -p customer-registration-integration-tests -- --ignored

use customer_registration_core::NewCustomer;
use customer_registration_integration_tests::{store, unique_email};
use customer_registration_server::db::{CustomerStore, RepositoryError};

fn new_customer(name: &str, email: &str) -> NewCustomer {
    NewCustomer::parse(Some(name), Some(email)).expect("valid customer")
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_ensure_schema_is_idempotent() {
    let store = store().await;

    store.ensure_schema().await.expect("second run failed");
    store.ensure_schema().await.expect("third run failed");
    store.ping().await.expect("ping failed");
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_insert_then_conflict() {
    let store = store().await;
    let email = unique_email("store");

    let first = store
        .insert(&new_customer("Grace Hopper", &email))
        .await
        .expect("insert failed");
    assert_eq!(first.email.as_str(), email);

    let err = store
        .insert(&new_customer("Someone Else", &email))
        .await
        .expect_err("duplicate insert succeeded");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let found = store
        .find_by_email(&first.email)
        .await
        .expect("lookup failed");
    assert_eq!(found, Some(first));
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_concurrent_duplicate_inserts_admit_exactly_one() {
    let store = store().await;
    let email = unique_email("race");

    let attempts = (0..8).map(|i| {
        let store = store.clone();
        let customer = new_customer(&format!("Racer {i}"), &email);
        tokio::spawn(async move { store.insert(&customer).await })
    });

    let mut created = 0;
    let mut conflicts = 0;
    for handle in attempts.collect::<Vec<_>>() {
        match handle.await.expect("task panicked") {
            Ok(_) => created += 1,
            Err(RepositoryError::Conflict(_)) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
}
