use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::state::AppState;

/// Liveness endpoint
#[tracing::instrument]
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "Hello World")
}

/// Health check endpoint: verifies the database answers `SELECT 1`
#[tracing::instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db_pool.health_check().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable"),
    }
}
