//! Top-level router assembly shared by the binary and integration tests.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::config::GatewayConfig;
use crate::web;
use crate::ws::handler::ws_handler;

/// Builds the full application: HTML pages, REST API, WebSocket, and the
/// HTTP middleware stack.
pub fn build_app(state: AppState, config: &GatewayConfig) -> Router {
    Router::new()
        .merge(web::routes())
        .merge(api::build_router(config.admin_reset_enabled))
        .route("/ws", get(ws_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                )),
        )
        .with_state(state)
}
