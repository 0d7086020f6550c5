//! Customer registration: validate, persist, classify the outcome.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use customer_registration_core::{Customer, NewCustomer, ValidationError};

use crate::db::{CustomerStore, RepositoryError};

/// Why a registration did not produce a customer.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Input was missing a required field. Nothing was sent to the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The email is already registered.
    #[error("email already registered")]
    Conflict,

    /// The store failed for any other reason.
    #[error("registration failed: {0}")]
    Internal(#[source] RepositoryError),
}

impl From<RepositoryError> for RegistrationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => Self::Conflict,
            other => Self::Internal(other),
        }
    }
}

/// Registers customers against an injected [`CustomerStore`].
#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn CustomerStore>,
}

impl RegistrationService {
    #[must_use]
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the backing store.
    #[must_use]
    pub fn store(&self) -> &dyn CustomerStore {
        self.store.as_ref()
    }

    /// Register a customer.
    ///
    /// # Errors
    ///
    /// - `RegistrationError::Validation` if `name` or `email` is absent or empty
    /// - `RegistrationError::Conflict` if the email is already on file
    /// - `RegistrationError::Internal` for any other store failure
    #[instrument(skip(self, name, email))]
    pub async fn register(
        &self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Customer, RegistrationError> {
        let new_customer = NewCustomer::parse(name, email)?;

        let customer = self.store.insert(&new_customer).await?;
        tracing::info!(
            customer_id = %customer.id,
            email = %customer.email,
            "New customer registered"
        );

        Ok(customer)
    }
}
