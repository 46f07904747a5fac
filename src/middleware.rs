//! Request ID middleware for correlating logs with requests.
//!
//! Every request gets a UUID v4 and a tracing span carrying it. The ID is
//! echoed back in the `x-request-id` header. Orchestrator probes hit the
//! server every few seconds, so their completion lines are logged at debug
//! level while everything else is logged at info.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the request ID.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Paths polled by the orchestrator.
const PROBE_PATHS: [&str; 2] = ["/healthz", "/ready"];

/// Request ID stored in request extensions.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

fn is_probe(path: &str) -> bool {
    PROBE_PATHS.contains(&path)
}

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost layer so the span wraps all processing.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let probe = is_probe(&path);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));
    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        tracing::Span::current().record("duration_ms", duration_ms);
        if probe {
            tracing::debug!(status, duration_ms, "Probe completed");
        } else {
            tracing::info!(status, duration_ms, "Request completed");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}
