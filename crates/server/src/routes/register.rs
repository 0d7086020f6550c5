//! `POST /api/register` handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::instrument;

use customer_registration_core::api::{
    MSG_INVALID_BODY, MSG_REGISTERED, RegisterRequest, RegisterResponse,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Register a customer.
///
/// Responds 201 with the stored record, or an [`AppError`] rendered as
/// 400/409/500.
#[instrument(skip_all, fields(email = tracing::field::Empty))]
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable registration body");
        AppError::BadRequest(MSG_INVALID_BODY.to_string())
    })?;

    if let Some(email) = request.email.as_deref() {
        tracing::Span::current().record("email", email);
    }

    let customer = state
        .registration()
        .register(request.name.as_deref(), request.email.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: MSG_REGISTERED.to_string(),
            customer: Some(customer),
        }),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, header},
    };
    use chrono::Utc;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::db::CustomerStore;
    use crate::db::memory::MemoryCustomerStore;

    fn app() -> (Router, Arc<MemoryCustomerStore>) {
        let store = Arc::new(MemoryCustomerStore::new());
        (crate::app(AppState::new(store.clone())), store)
    }

    async fn post(router: &Router, body: Body, content_type: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/api/register");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(router: &Router, body: &Value) -> (StatusCode, Value) {
        post(router, Body::from(body.to_string()), Some("application/json")).await
    }

    #[tokio::test]
    async fn test_register_success_returns_record() {
        let (router, store) = app();
        let before = Utc::now();

        let (status, body) = post_json(
            &router,
            &json!({"name": "Ada Lovelace", "email": "ada@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Customer registered successfully!");
        assert_eq!(body["customer"]["name"], "Ada Lovelace");
        assert_eq!(body["customer"]["email"], "ada@example.com");
        assert!(body["customer"]["id"].is_number());

        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].registered_at >= before);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_every_time() {
        let (router, store) = app();
        let payload = json!({"name": "Ada Lovelace", "email": "ada@example.com"});
        let (status, _) = post_json(&router, &payload).await;
        assert_eq!(status, StatusCode::CREATED);

        for _ in 0..2 {
            let (status, body) = post_json(
                &router,
                &json!({"name": "Someone Else", "email": "ada@example.com"}),
            )
            .await;
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(body, json!({"error": "This email is already registered."}));
        }

        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_str(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_insert() {
        let (router, store) = app();
        let payloads = [
            json!({"name": "", "email": "x@example.com"}),
            json!({"name": "Ada", "email": ""}),
            json!({"name": "Ada"}),
            json!({"email": "x@example.com"}),
            json!({}),
            json!({"name": null, "email": null}),
        ];

        for payload in &payloads {
            let (status, body) = post_json(&router, payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
            assert_eq!(body, json!({"error": "Name and email are required."}));
        }

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_values_are_stored_as_sent() {
        let (router, store) = app();

        let (status, body) =
            post_json(&router, &json!({"name": "   ", "email": "x@example.com"})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["customer"]["name"], "   ");

        let (status, body) = post_json(
            &router,
            &json!({"name": "Ada", "email": "  ada@example.com  "}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["customer"]["email"], "  ada@example.com  ");

        let (status, _) =
            post_json(&router, &json!({"name": "Ada2", "email": "ada@example.com"})).await;
        assert_eq!(status, StatusCode::CREATED);

        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_bad_request() {
        let (router, store) = app();

        let (status, body) = post(&router, Body::from("{not json"), Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body.");

        let (status, _) = post(
            &router,
            Body::from(r#"{"name":"Ada","email":"a@example.com"}"#),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let (router, store) = app();
        store.set_unavailable(true);

        let (status, body) = post_json(
            &router,
            &json!({"name": "Ada Lovelace", "email": "ada@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to register customer."}));
    }

    #[tokio::test]
    async fn test_readiness_reflects_store() {
        let (router, store) = app();
        let ready = || {
            router
                .clone()
                .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
        };

        assert_eq!(ready().await.unwrap().status(), StatusCode::OK);
        store.set_unavailable(true);
        assert_eq!(
            ready().await.unwrap().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_liveness() {
        let (router, _store) = app();
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
