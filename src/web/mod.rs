//! Browser surface: HTML pages and form posts.
//!
//! Mirrors the JSON API for people using a browser. Unknown warehouses
//! redirect to the list; unparsable numbers re-render the form with a
//! message.

pub mod pages;
pub mod render;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// HTML routes mounted at the root.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/create", get(pages::create_form).post(pages::create_submit))
        .route("/search", get(pages::search))
        .route("/warehouse/{name}", get(pages::view))
        .route(
            "/warehouse/{name}/modify",
            get(pages::modify_form).post(pages::modify_submit),
        )
        .route(
            "/warehouse/{name}/add",
            get(pages::add_form).post(pages::add_submit),
        )
        .route(
            "/warehouse/{name}/take",
            get(pages::take_form).post(pages::take_submit),
        )
}
