// Per-request correlation id
//
// Ids come from the local clock (`YYYYMMDDhhmmss` + milliseconds). An id sent
// by the caller in `x-request-id` is kept.

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampRequestId;

impl MakeRequestId for TimestampRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&common::telemetry::new_request_id())
            .ok()
            .map(RequestId::new)
    }
}

/// Root span of a request, carrying its correlation id
pub fn request_span<B>(request: &Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
