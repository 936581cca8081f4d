//! Session API endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Local;

use crate::api::middleware::{ApiError, AppState};
use crate::models::{CreateSessionInput, DateRange, DateRangeQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(list_sessions).post(create_session))
        // GET takes a session name, DELETE a numeric id
        .route(
            "/session/{key}",
            get(list_sessions_by_name).delete(delete_session),
        )
        .route("/name", get(list_session_names))
}

fn resolve_range(query: &DateRangeQuery) -> Result<DateRange, ApiError> {
    query
        .resolve(Local::now().date_naive())
        .map_err(|e| ApiError::validation_error(e.to_string()))
}

/// GET /session?start-date=..&end-date=..
async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let range = resolve_range(&query)?;
    tracing::debug!(%range, "listing sessions");
    let data = state.session_service.list(&range).await?;
    Ok(Json(data))
}

/// GET /session/{name}?start-date=..&end-date=..
async fn list_sessions_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let range = resolve_range(&query)?;
    tracing::debug!(%range, name = %name, "listing sessions by name");
    let data = state.session_service.list_by_name(&name, &range).await?;
    Ok(Json(data))
}

/// POST /session
async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<CreateSessionInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::info!("Error while parsing body: {}", rejection.body_text());
        ApiError::validation_error(rejection.body_text())
    })?;

    let session = state.session_service.create(input).await?;
    Ok(Json(session))
}

/// GET /name
async fn list_session_names(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let names = state.session_service.list_names().await?;
    Ok(Json(names))
}

/// DELETE /session/{id}
async fn delete_session(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::validation_error(rejection.body_text()))?;
    state.session_service.delete(id).await?;
    Ok(StatusCode::OK)
}
