//! Transport to the registration service.
//!
//! [`RegistrationApi`] is the seam the form talks through; the production
//! implementation is [`HttpRegistrationApi`].

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use customer_registration_core::api::{
    ErrorResponse, REGISTER_PATH, RegisterRequest, RegisterResponse,
};

/// Failure to obtain any HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The configured service URL could not be parsed.
    #[error("invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection, TLS, or body-read failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// What the service said about a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// 2xx. The body is absent if it could not be decoded.
    Created(Option<RegisterResponse>),

    /// Any other status, with the server-provided error text.
    Rejected { status: u16, error: String },
}

/// Sends registration requests.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Issue exactly one registration request.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` only when no response was received.
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, TransportError>;
}

/// [`RegistrationApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistrationApi {
    client: Client,
    endpoint: Url,
}

impl HttpRegistrationApi {
    /// Create a client for the service rooted at `base_url`
    /// (e.g. `http://127.0.0.1:3001`).
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidUrl` if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Like [`HttpRegistrationApi::new`] but with a preconfigured `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidUrl` if `base_url` is not a valid URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(base_url)?.join(REGISTER_PATH)?;
        Ok(Self { client, endpoint })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            let body = serde_json::from_slice::<RegisterResponse>(&bytes).ok();
            return Ok(ApiResponse::Created(body));
        }

        let error = serde_json::from_slice::<ErrorResponse>(&bytes).map_or_else(
            |_| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            },
            |body| body.error,
        );

        tracing::debug!(status = status.as_u16(), %error, "Registration rejected");
        Ok(ApiResponse::Rejected {
            status: status.as_u16(),
            error,
        })
    }
}
