//! OpenAPI document for the REST surface.

use axum::Router;
use utoipa::OpenApi;

use super::handlers::{inventory, system, warehouse};
use crate::app_state::AppState;

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of every JSON endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "warehouse-gateway",
        description = "Create, inspect, fill, drain and resize named bounded warehouses."
    ),
    paths(
        warehouse::create_warehouse,
        warehouse::list_warehouses,
        warehouse::get_warehouse,
        warehouse::delete_warehouse,
        warehouse::search_warehouses,
        inventory::deposit,
        inventory::withdraw,
        inventory::resize,
        system::health_handler,
        system::reset_handler,
    ),
    tags(
        (name = "Warehouses", description = "Warehouse lifecycle and search"),
        (name = "Inventory", description = "Deposits, withdrawals and capacity changes"),
        (name = "System", description = "Health and administration"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document, with Swagger UI when the `swagger-ui`
/// feature is enabled.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
    )
}

/// Serves the OpenAPI document, with Swagger UI when the `swagger-ui`
/// feature is enabled.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/warehouses",
            "/api/v1/warehouses/{name}",
            "/api/v1/warehouses/{name}/deposit",
            "/api/v1/warehouses/{name}/withdraw",
            "/api/v1/warehouses/{name}/capacity",
            "/api/v1/search",
            "/health",
            "/admin/reset",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
