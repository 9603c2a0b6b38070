use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{request_span, TimestampRequestId, REQUEST_ID_HEADER};
use crate::state::AppState;

/// Create the main application router with all routes and middleware
#[tracing::instrument(skip(state))]
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let client_routes =
        Router::new().route("/existe-cliente", get(handlers::clients::existe_cliente));

    Router::new()
        .route("/ping", get(handlers::health::ping))
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::metrics_handler))
        .nest("/clientes", client_routes)
        .route("/facturas", get(handlers::invoices::buscar_facturas))
        .route("/facturas/", get(handlers::invoices::buscar_facturas))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, TimestampRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
                .layer(cors)
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}

/// Any origin unless an allow-list is configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(12 * 60 * 60))
}
