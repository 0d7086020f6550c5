//! Customer Registration Client.
//!
//! The registration form as a plain state machine plus the HTTP transport it
//! submits through.
//!
//! ```rust,no_run
//! use customer_registration_client::{HttpRegistrationApi, RegistrationForm};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpRegistrationApi::new("http://127.0.0.1:3001")?;
//! let mut form = RegistrationForm::new();
//! form.set_name("Ada Lovelace");
//! form.set_email("ada@example.com");
//! form.submit(&api).await;
//! println!("{}", form.status());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod form;

pub use api::{ApiResponse, HttpRegistrationApi, RegistrationApi, TransportError};
pub use form::{RegistrationForm, SubmitOutcome};
