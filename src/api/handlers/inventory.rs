//! Inventory handlers: deposit, withdraw, resize.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::api::dto::{
    AmountRequest, DepositResponse, ResizeRequest, WarehouseDto, WithdrawResponse,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /warehouses/{name}/deposit` — Add items to a warehouse.
///
/// # Errors
///
/// Returns [`GatewayError`] on an unparsable amount or a missing warehouse.
#[utoipa::path(
    post,
    path = "/api/v1/warehouses/{name}/deposit",
    tag = "Inventory",
    summary = "Deposit items",
    description = "Adds `amount` to the balance. Non-positive amounts are ignored; anything above capacity is discarded and reported.",
    params(
        ("name" = String, Path, description = "Warehouse name (case-sensitive)"),
    ),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Deposit applied", body = DepositResponse),
        (status = 400, description = "Malformed body or amount is not a number", body = ErrorResponse),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
    )
)]
pub async fn deposit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload?;
    let amount = req.amount.resolve("amount")?;
    let outcome = state.warehouse_service.deposit(&name, amount).await?;
    Ok(Json(DepositResponse::from(outcome)))
}

/// `POST /warehouses/{name}/withdraw` — Take items from a warehouse.
///
/// # Errors
///
/// Returns [`GatewayError`] on an unparsable amount or a missing warehouse.
#[utoipa::path(
    post,
    path = "/api/v1/warehouses/{name}/withdraw",
    tag = "Inventory",
    summary = "Withdraw items",
    description = "Removes up to `amount` from the balance and reports the amount actually removed.",
    params(
        ("name" = String, Path, description = "Warehouse name (case-sensitive)"),
    ),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Withdrawal applied", body = WithdrawResponse),
        (status = 400, description = "Malformed body or amount is not a number", body = ErrorResponse),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
    )
)]
pub async fn withdraw(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload?;
    let amount = req.amount.resolve("amount")?;
    let outcome = state.warehouse_service.withdraw(&name, amount).await?;
    Ok(Json(WithdrawResponse::from(outcome)))
}

/// `PUT /warehouses/{name}/capacity` — Change a warehouse's capacity.
///
/// # Errors
///
/// Returns [`GatewayError`] on an unparsable capacity or a missing
/// warehouse.
#[utoipa::path(
    put,
    path = "/api/v1/warehouses/{name}/capacity",
    tag = "Inventory",
    summary = "Resize a warehouse",
    description = "Sets a new capacity. Shrinking below the balance truncates the balance.",
    params(
        ("name" = String, Path, description = "Warehouse name (case-sensitive)"),
    ),
    request_body = ResizeRequest,
    responses(
        (status = 200, description = "Capacity changed", body = WarehouseDto),
        (status = 400, description = "Malformed body or capacity is not a number", body = ErrorResponse),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
    )
)]
pub async fn resize(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<ResizeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload?;
    let capacity = req.capacity.resolve("capacity")?;
    let summary = state.warehouse_service.resize(&name, capacity).await?;
    Ok(Json(WarehouseDto::from(summary)))
}

/// Inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/warehouses/{name}/deposit", post(deposit))
        .route("/warehouses/{name}/withdraw", post(withdraw))
        .route("/warehouses/{name}/capacity", put(resize))
}
