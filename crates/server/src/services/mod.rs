//! Business logic sitting between route handlers and the store.

pub mod registration;

pub use registration::{RegistrationError, RegistrationService};
