//! Core types for customer registration.
//!
//! This module provides type-safe wrappers for the customer domain.

pub mod customer;
pub mod email;
pub mod id;
pub mod name;

pub use customer::{Customer, NewCustomer, ValidationError};
pub use email::{Email, EmailError};
pub use id::CustomerId;
pub use name::{CustomerName, NameError};
