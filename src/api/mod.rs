//! REST API layer: route handlers, DTOs, input parsing, and router
//! composition.
//!
//! Resource endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;
pub mod input;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router(admin_reset_enabled: bool) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes(admin_reset_enabled))
        .merge(openapi::routes())
}
