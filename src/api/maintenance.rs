//! Operator endpoints: store reset and health check
//!
//! The reset route keeps the historical `maintainance` spelling so existing
//! scripts keep working.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::api::middleware::{ApiError, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/maintainance/session", get(reset_sessions))
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub total_requests: u64,
    pub avg_response_time_us: f64,
}

/// GET /maintainance/session - drop and recreate the session table
async fn reset_sessions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.session_service.reset().await?;
    Ok(StatusCode::OK)
}

/// GET /health
async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.pool.ping().await.map_err(|e| {
        tracing::error!("Health check failed: {:#}", e);
        ApiError::service_unavailable("Database unreachable")
    })?;

    let stats = &state.request_stats;
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: stats.uptime_seconds(),
        total_requests: stats.total_requests(),
        avg_response_time_us: stats.avg_response_time_us(),
    }))
}
