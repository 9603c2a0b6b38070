pub mod clients;
pub mod health;
pub mod invoices;
pub mod metrics;

// Common response types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::errors::SearchError;
use serde::Serialize;

/// `{ "error": ... }` body used by the invoice endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Status code for a failed search
pub fn status_for(err: &SearchError) -> StatusCode {
    match err {
        SearchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        SearchError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Raw database text for a store failure, only when exposure is enabled
pub fn store_detail(err: &SearchError, expose: bool) -> Option<String> {
    match err {
        SearchError::Store { source, .. } if expose => Some(source.to_string()),
        _ => None,
    }
}
