//! System endpoints: health check and registry reset.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` when the process answers.
    pub status: String,
    /// Current server time (RFC 3339).
    pub timestamp: String,
    /// Crate version.
    pub version: String,
    /// Number of warehouses currently registered.
    pub warehouse_count: usize,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, warehouse count, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let warehouse_count = state.warehouse_service.registry().len().await;
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            warehouse_count,
        }),
    )
}

/// `POST /admin/reset` — Drop every warehouse.
#[utoipa::path(
    post,
    path = "/admin/reset",
    tag = "System",
    summary = "Reset the registry",
    description = "Removes every warehouse. Intended for tests and demos; can be disabled with ADMIN_RESET_ENABLED=false.",
    responses(
        (status = 204, description = "Registry cleared"),
    )
)]
pub async fn reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.warehouse_service.reset().await;
    StatusCode::NO_CONTENT
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes(admin_reset_enabled: bool) -> Router<AppState> {
    let router = Router::new().route("/health", get(health_handler));
    if admin_reset_enabled {
        router.route("/admin/reset", post(reset_handler))
    } else {
        router
    }
}
