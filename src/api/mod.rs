//! API layer - HTTP handlers and routing
//!
//! This module contains the HTTP surface of the pomo server:
//! - Session endpoints (list, list by name, record, delete, names)
//! - Maintenance endpoints (store reset, health)

pub mod maintenance;
pub mod middleware;
pub mod sessions;

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use middleware::{ApiError, AppState, RequestStats};

/// Build the API routes
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .merge(sessions::router())
        .merge(maintenance::router())
}

fn cors_layer(cors_origin: &str) -> CorsLayer {
    let origin = if cors_origin == "*" {
        AllowOrigin::any()
    } else {
        match cors_origin.parse::<HeaderValue>() {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!("Invalid CORS origin '{}', allowing any origin", cors_origin);
                AllowOrigin::any()
            }
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    Router::new()
        .merge(build_api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origin)),
        )
        // Request stats middleware (outermost layer, runs for all requests)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::request_stats_middleware,
        ))
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use super::test_support::test_server;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let server = test_server().await;
        server
            .get("/nope")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        use super::*;
        use crate::db::repositories::SqlxSessionRepository;
        use crate::db::create_test_pool;
        use crate::services::SessionService;
        use axum::body::Body;
        use axum::http::Request;
        use std::sync::Arc;
        use tower::ServiceExt;

        let pool = create_test_pool().await.unwrap();
        let service = Arc::new(SessionService::new(SqlxSessionRepository::boxed(pool.clone())));
        let app = build_router(AppState::new(pool, service), "http://localhost:3000");

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/session")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:3000"))
        );
    }

    #[test]
    fn test_invalid_cors_origin_does_not_panic() {
        let _ = super::cors_layer("bad\norigin");
        let _ = super::cors_layer("http://localhost:3000");
    }
}
