//! HTTP route handlers for the registration service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (pings the store)
//! POST /api/register    - Register a customer
//! ```

pub mod health;
pub mod register;

use axum::{
    Router,
    routing::{get, post},
};

use customer_registration_core::api::REGISTER_PATH;

use crate::state::AppState;

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/ready", get(health::readiness))
}

/// Create all routes for the registration service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .route(REGISTER_PATH, post(register::register))
}
