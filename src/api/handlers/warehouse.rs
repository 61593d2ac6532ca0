//! Warehouse CRUD handlers: create, list, get, delete, search.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    CreateWarehouseRequest, SearchParams, SearchResponse, WarehouseDto, WarehouseListResponse,
};
use crate::app_state::AppState;
use crate::domain::WarehouseName;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /warehouses` — Create a new warehouse.
///
/// # Errors
///
/// Returns [`GatewayError`] on unparsable numbers, a blank name, or a
/// duplicate name.
#[utoipa::path(
    post,
    path = "/api/v1/warehouses",
    tag = "Warehouses",
    summary = "Create a warehouse",
    description = "Creates a named warehouse. Capacity and initial balance are clamped into range rather than rejected; only non-numeric input fails.",
    request_body = CreateWarehouseRequest,
    responses(
        (status = 201, description = "Warehouse created", body = WarehouseDto),
        (status = 400, description = "Malformed body, invalid number or blank name", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
    )
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    payload: Result<Json<CreateWarehouseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload?;
    // Numbers are checked before the name, as on the HTML form.
    let capacity = req.capacity.resolve("capacity")?;
    let initial_balance = match &req.initial_balance {
        Some(input) => input.resolve("initial_balance")?,
        None => 0.0,
    };
    let name = WarehouseName::parse(&req.name)?;

    let summary = state
        .warehouse_service
        .create_warehouse(name, capacity, initial_balance)
        .await?;

    Ok((StatusCode::CREATED, Json(WarehouseDto::from(summary))))
}

/// `GET /warehouses` — List all warehouses in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/warehouses",
    tag = "Warehouses",
    summary = "List warehouses",
    description = "Returns every warehouse in creation order.",
    responses(
        (status = 200, description = "Warehouse list", body = WarehouseListResponse),
    )
)]
pub async fn list_warehouses(State(state): State<AppState>) -> impl IntoResponse {
    let data: Vec<WarehouseDto> = state
        .warehouse_service
        .list_warehouses()
        .await
        .into_iter()
        .map(WarehouseDto::from)
        .collect();
    let total = data.len();
    Json(WarehouseListResponse { data, total })
}

/// `GET /warehouses/{name}` — Get warehouse details.
///
/// # Errors
///
/// Returns [`GatewayError::WarehouseNotFound`] if the warehouse does not
/// exist.
#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{name}",
    tag = "Warehouses",
    summary = "Get a warehouse",
    description = "Returns capacity, balance, available space and summary for one warehouse.",
    params(
        ("name" = String, Path, description = "Warehouse name (case-sensitive)"),
    ),
    responses(
        (status = 200, description = "Warehouse details", body = WarehouseDto),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
    )
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let summary = state.warehouse_service.get_warehouse(&name).await?;
    Ok(Json(WarehouseDto::from(summary)))
}

/// `DELETE /warehouses/{name}` — Remove a warehouse.
///
/// # Errors
///
/// Returns [`GatewayError::WarehouseNotFound`] if the warehouse does not
/// exist.
#[utoipa::path(
    delete,
    path = "/api/v1/warehouses/{name}",
    tag = "Warehouses",
    summary = "Delete a warehouse",
    description = "Removes a warehouse and emits a warehouse_removed event.",
    params(
        ("name" = String, Path, description = "Warehouse name (case-sensitive)"),
    ),
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
    )
)]
pub async fn delete_warehouse(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    state.warehouse_service.remove_warehouse(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /search?q=` — Case-insensitive name search.
#[utoipa::path(
    get,
    path = "/api/v1/search",
    tag = "Warehouses",
    summary = "Search warehouses by name",
    description = "Returns warehouses whose name contains `q`, ignoring case. A missing or blank `q` yields `query: null` and no results.",
    params(SearchParams),
    responses(
        (status = 200, description = "Search outcome", body = SearchResponse),
    )
)]
pub async fn search_warehouses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let outcome = state.warehouse_service.search_warehouses(&query).await;
    Json(SearchResponse::from(outcome))
}

/// Warehouse management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/warehouses",
            get(list_warehouses).post(create_warehouse),
        )
        .route(
            "/warehouses/{name}",
            get(get_warehouse).delete(delete_warehouse),
        )
        .route("/search", get(search_warehouses))
}
