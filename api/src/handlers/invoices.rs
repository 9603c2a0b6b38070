use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use common::errors::SearchError;
use common::search::InvoiceQuery;
use common::telemetry;

use super::clients::outcome_of;
use super::{status_for, store_detail, ErrorResponse};
use crate::state::AppState;

/// GET /facturas
///
/// Filtered, paginated invoice search. Returns the pagination envelope, or
/// `{ "error": ... }` with 400 on an invalid `mes`/`anio` and 500 on store failure.
#[tracing::instrument(skip(state))]
pub async fn buscar_facturas(
    State(state): State<AppState>,
    Query(query): Query<InvoiceQuery>,
) -> Response {
    match state.invoices.search(&query).await {
        Ok(page) => {
            telemetry::record_request("facturas", "ok");
            Json(page).into_response()
        }
        Err(err) => {
            telemetry::record_request("facturas", outcome_of(&err));
            error_response(&err, state.config.api.expose_store_errors).into_response()
        }
    }
}

fn error_response(err: &SearchError, expose_store_errors: bool) -> ErrorResponse {
    let message = match (err, store_detail(err, expose_store_errors)) {
        (SearchError::InvalidRequest(e), _) => e.to_string(),
        (SearchError::Store { context, .. }, Some(detail)) => format!("{context}: {detail}"),
        (SearchError::Store { context, .. }, None) => context.to_string(),
    };
    ErrorResponse::new(status_for(err), message)
}
