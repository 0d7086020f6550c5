//! Wire contract for `POST /api/register`.
//!
//! | Condition       | Status | Body                                       |
//! |-----------------|--------|--------------------------------------------|
//! | missing field   | 400    | [`ErrorResponse`] with [`MSG_REQUIRED`]    |
//! | success         | 201    | [`RegisterResponse`]                       |
//! | duplicate email | 409    | [`ErrorResponse`] with [`MSG_DUPLICATE`]   |
//! | other failure   | 500    | [`ErrorResponse`] with [`MSG_INTERNAL`]    |

use serde::{Deserialize, Serialize};

use crate::Customer;

/// Path of the registration endpoint.
pub const REGISTER_PATH: &str = "/api/register";

/// Returned with 400 when a field is missing.
pub const MSG_REQUIRED: &str = "Name and email are required.";

/// Returned with 409 when the email is already on file.
pub const MSG_DUPLICATE: &str = "This email is already registered.";

/// Returned with 500 for any unexpected failure.
pub const MSG_INTERNAL: &str = "Failed to register customer.";

/// Returned with 400 when the body is not a JSON object of the expected shape.
pub const MSG_INVALID_BODY: &str = "Invalid request body.";

/// Message accompanying a 201.
pub const MSG_REGISTERED: &str = "Customer registered successfully!";

/// Registration request body.
///
/// Fields are optional on the wire so that a missing key is reported as a
/// validation failure rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl RegisterRequest {
    /// Build a request from form field values.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Body of a 201 response.
///
/// `customer` is always sent by this service, but clients must not rely on
/// it being present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_keys_deserialize_to_none() {
        let req: RegisterRequest = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert_eq!(req.email, None);

        let req: RegisterRequest = serde_json::from_str(r#"{"name":null,"email":null}"#).unwrap();
        assert_eq!(req, RegisterRequest::default());
    }

    #[test]
    fn test_response_without_customer_is_accepted() {
        let resp: RegisterResponse =
            serde_json::from_str(r#"{"message":"Customer registered successfully!"}"#).unwrap();
        assert_eq!(resp.message, MSG_REGISTERED);
        assert!(resp.customer.is_none());
    }

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_string(&ErrorResponse::new(MSG_DUPLICATE)).unwrap();
        assert_eq!(json, r#"{"error":"This email is already registered."}"#);
    }
}
