use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::errors::SearchError;
use common::models::Client;
use common::search::{ClientOutcome, ClientQuery};
use common::telemetry;
use serde::Serialize;

use super::{status_for, store_detail};
use crate::state::AppState;

pub const NOT_FOUND: &str = "No se encontraron códigos de cliente";
pub const CODES_FOUND: &str = "Códigos de cliente encontrados";
pub const DETAILS_FOUND: &str = "Detalles de clientes encontrados";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ClientData {
    Codes(Vec<String>),
    Details(Vec<Client>),
}

/// Envelope of every `/clientes` response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub message: String,
    pub status_code: u16,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ClientData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClientResponse {
    fn found(message: &str, data: ClientData, count: usize) -> Self {
        Self {
            message: message.to_string(),
            status_code: StatusCode::OK.as_u16(),
            success: true,
            data: Some(data),
            count: Some(count),
            error: None,
        }
    }

    fn not_found() -> Self {
        Self {
            message: NOT_FOUND.to_string(),
            status_code: StatusCode::OK.as_u16(),
            success: false,
            data: None,
            count: None,
            error: None,
        }
    }

    fn failure(err: &SearchError, expose_store_errors: bool) -> Self {
        let message = match err {
            SearchError::InvalidRequest(e) => e.to_string(),
            SearchError::Store { context, .. } => context.to_string(),
        };
        Self {
            message,
            status_code: status_for(err).as_u16(),
            success: false,
            data: None,
            count: None,
            error: store_detail(err, expose_store_errors),
        }
    }
}

impl From<ClientOutcome> for ClientResponse {
    fn from(outcome: ClientOutcome) -> Self {
        match outcome {
            ClientOutcome::NotFound => Self::not_found(),
            ClientOutcome::Codes(codes) => {
                let count = codes.len();
                Self::found(CODES_FOUND, ClientData::Codes(codes), count)
            }
            ClientOutcome::Details(clients) => {
                let count = clients.len();
                Self::found(DETAILS_FOUND, ClientData::Details(clients), count)
            }
        }
    }
}

impl IntoResponse for ClientResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// GET /clientes/existe-cliente
///
/// Looks clients up by `codigo` (exact) or `rif`, returning their codes or,
/// with `cliente=si`, the full records.
#[tracing::instrument(skip(state))]
pub async fn existe_cliente(
    State(state): State<AppState>,
    Query(query): Query<ClientQuery>,
) -> ClientResponse {
    match state.clients.search(&query).await {
        Ok(outcome) => {
            let outcome_label = match &outcome {
                ClientOutcome::NotFound => "not_found",
                _ => "ok",
            };
            telemetry::record_request("clientes", outcome_label);
            outcome.into()
        }
        Err(err) => {
            telemetry::record_request("clientes", outcome_of(&err));
            ClientResponse::failure(&err, state.config.api.expose_store_errors)
        }
    }
}

pub(crate) fn outcome_of(err: &SearchError) -> &'static str {
    match err {
        SearchError::InvalidRequest(_) => "invalid",
        SearchError::Store { .. } => "store_error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::errors::{DatabaseError, ValidationError};

    #[test]
    fn test_not_found_envelope_has_no_data() {
        let json = serde_json::to_value(ClientResponse::from(ClientOutcome::NotFound)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": NOT_FOUND,
                "statusCode": 200,
                "success": false
            })
        );
    }

    #[test]
    fn test_codes_envelope() {
        let response = ClientResponse::from(ClientOutcome::Codes(vec!["C1".into(), "C2".into()]));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::json!(["C1", "C2"]));
        assert_eq!(json["count"], 2);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], CODES_FOUND);
    }

    #[test]
    fn test_failure_hides_store_text_by_default() {
        let err = SearchError::Store {
            context: "Error al consultar los clientes",
            source: DatabaseError::QueryFailed("connection reset".into()),
        };

        let hidden = ClientResponse::failure(&err, false);
        assert_eq!(hidden.status_code, 500);
        assert!(hidden.error.is_none());

        let shown = ClientResponse::failure(&err, true);
        assert_eq!(
            shown.error.as_deref(),
            Some("Query execution failed: connection reset")
        );
    }

    #[test]
    fn test_missing_key_is_bad_request() {
        let err = SearchError::InvalidRequest(ValidationError::MissingClientKey);
        let response = ClientResponse::failure(&err, true);
        assert_eq!(response.status_code, 400);
        assert_eq!(response.message, "Falta el RIF o Código a buscar");
        assert!(response.error.is_none());
    }
}
