//! HTTP route handlers.
//!
//! The route table is built once at startup. Probe and crash responses are
//! marked `no-store` so no intermediary ever replays a stale probe result.
//! Unknown paths fall through to the router's default 404, and known paths
//! hit with the wrong method get a 405.

pub mod crash;
pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new().route("/", get(home::index));

    // Probes and the crash switch - always fresh
    let probe_routes = Router::new()
        .route("/healthz", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/crash", get(crash::crash))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(home_routes)
        .merge(probe_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::error::DEAD_BODY;
    use crate::middleware::REQUEST_ID_HEADER;

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, http::HeaderMap, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_path(app: &Router, uri: &str) -> (StatusCode, String) {
        let (status, _, body) = send(app, "GET", uri).await;
        (status, body)
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let app = create_router(AppState::new());
        let (status, body) = get_path(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, home::GREETING);
    }

    #[tokio::test]
    async fn test_healthy_until_crash() {
        let app = create_router(AppState::new());
        for _ in 0..3 {
            assert_eq!(get_path(&app, "/healthz").await, (StatusCode::OK, health::ALIVE_BODY.to_string()));
            assert_eq!(get_path(&app, "/ready").await, (StatusCode::OK, health::READY_BODY.to_string()));
            assert_eq!(get_path(&app, "/").await.0, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_crash_fails_liveness_only() {
        let app = create_router(AppState::new());

        let (status, body) = get_path(&app, "/crash").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, crash::CRASH_BODY);

        let (status, body) = get_path(&app, "/healthz").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, DEAD_BODY);

        assert_eq!(get_path(&app, "/ready").await, (StatusCode::OK, health::READY_BODY.to_string()));
        assert_eq!(get_path(&app, "/").await, (StatusCode::OK, home::GREETING.to_string()));
    }

    #[tokio::test]
    async fn test_crash_is_idempotent() {
        let state = AppState::new();
        let app = create_router(state.clone());
        for _ in 0..3 {
            assert_eq!(get_path(&app, "/crash").await, (StatusCode::OK, crash::CRASH_BODY.to_string()));
            assert!(state.liveness.is_dead());
            assert_eq!(get_path(&app, "/healthz").await.0, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_routers_have_independent_state() {
        let crashed = create_router(AppState::new());
        let healthy = create_router(AppState::new());

        get_path(&crashed, "/crash").await;

        assert_eq!(get_path(&crashed, "/healthz").await.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(get_path(&healthy, "/healthz").await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let app = create_router(AppState::new());
        assert_eq!(get_path(&app, "/livez").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get_path(&app, "/healthz/deep").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_not_allowed() {
        let state = AppState::new();
        let app = create_router(state.clone());
        let (status, _, _) = send(&app, "POST", "/crash").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        // Rejected before reaching the handler
        assert!(!state.liveness.is_dead());
    }

    #[tokio::test]
    async fn test_probe_responses_not_cacheable() {
        let app = create_router(AppState::new());
        for path in ["/healthz", "/ready", "/crash", "/healthz"] {
            let (_, headers, _) = send(&app, "GET", path).await;
            assert_eq!(headers[CACHE_CONTROL], CACHE_CONTROL_PROBE);
        }
        let (_, headers, _) = send(&app, "GET", "/").await;
        assert!(headers.get(CACHE_CONTROL).is_none());
    }

    #[tokio::test]
    async fn test_plain_text_and_request_id() {
        let app = create_router(AppState::new());
        let (_, headers, _) = send(&app, "GET", "/ready").await;
        assert!(headers[http::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let id = headers[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
