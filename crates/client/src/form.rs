//! The registration form.
//!
//! Holds the two input values and the status line shown to the user. A
//! submission is a single request with no retry; its result is written to
//! the status line before [`RegistrationForm::submit`] returns.

use customer_registration_core::api::RegisterRequest;
use customer_registration_core::Customer;

use crate::api::{ApiResponse, RegistrationApi};

/// Shown when either field is empty; no request is sent.
pub const MSG_FILL_BOTH: &str = "Please fill in both fields.";

/// Shown after a 2xx response.
pub const MSG_SUCCESS: &str = "Registration successful!";

/// Prefix for server-reported failures.
pub const MSG_FAILED_PREFIX: &str = "Registration failed: ";

/// Shown when no response was received.
pub const MSG_NETWORK: &str = "An error occurred. Please check your network connection.";

/// What happened on the last submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was empty; nothing was sent.
    Incomplete,
    /// The service accepted the registration. The record is present only if
    /// the service returned one.
    Registered(Option<Customer>),
    /// The service responded with an error status.
    Rejected { status: u16 },
    /// The request never got a response.
    NetworkError,
}

/// Form state: name, email, and the status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    name: String,
    email: String,
    status: String,
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The status message; empty when nothing should be shown.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Submit the current values.
    ///
    /// Clears the status, checks both fields are filled, then sends one
    /// request through `api` and records the result in the status message.
    /// On success both fields are cleared.
    pub async fn submit(&mut self, api: &dyn RegistrationApi) -> SubmitOutcome {
        self.status.clear();

        if self.name.is_empty() || self.email.is_empty() {
            self.status = MSG_FILL_BOTH.to_string();
            return SubmitOutcome::Incomplete;
        }

        let request = RegisterRequest::new(self.name.clone(), self.email.clone());

        match api.register(&request).await {
            Ok(ApiResponse::Created(body)) => {
                self.status = MSG_SUCCESS.to_string();
                self.name.clear();
                self.email.clear();
                SubmitOutcome::Registered(body.and_then(|b| b.customer))
            }
            Ok(ApiResponse::Rejected { status, error }) => {
                self.status = format!("{MSG_FAILED_PREFIX}{error}");
                SubmitOutcome::Rejected { status }
            }
            Err(e) => {
                tracing::error!(error = %e, "Registration request failed");
                self.status = MSG_NETWORK.to_string();
                SubmitOutcome::NetworkError
            }
        }
    }
}
