//! The customer record and its validated input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CustomerId, CustomerName, Email};

/// Registration input rejected before it reaches the store.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `name`, `email`, or both were absent or empty.
    #[error("Name and email are required.")]
    MissingFields,
}

/// A validated registration request, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub email: Email,
}

impl NewCustomer {
    /// Validate raw registration input.
    ///
    /// Both values must be present and non-empty. Nothing else is checked,
    /// and the values are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if either value is missing
    /// or empty.
    pub fn parse(name: Option<&str>, email: Option<&str>) -> Result<Self, ValidationError> {
        let name = name.and_then(|n| CustomerName::parse(n).ok());
        let email = email.and_then(|e| Email::parse(e).ok());

        match (name, email) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// A persisted customer.
///
/// `id` and `registered_at` are assigned by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    pub email: Email,
    pub registered_at: DateTime<Utc>,
}
