//! Route handlers.
//!
//! Each handler is a pure function of the configuration and, for
//! `/metrics`, the registry contents.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::observability::metrics::EXPOSITION_CONTENT_TYPE;

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub environment: String,
    pub app: String,
}

/// `GET /`
pub async fn home(State(state): State<AppState>) -> String {
    format!(
        "Hello from Docker! Running in {} mode.",
        state.config.environment
    )
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        environment: state.config.environment.clone(),
        app: state.config.app_name.clone(),
    })
}

/// `GET /error`: deliberate failure for exercising alerting.
pub async fn error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "failure")
}

/// `GET /metrics`
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        state.metrics.render(),
    )
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}
