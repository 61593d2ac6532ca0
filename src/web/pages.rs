//! Browser page handlers: list, create, view, modify, add, take, search.
//!
//! Pages that name an unknown warehouse answer `302 Found` to `/`.
//! Validation failures re-render the form with a message and status 200.

use axum::extract::{Form, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use super::render;
use crate::api::dto::SearchParams;
use crate::api::input::parse_number_or_zero;
use crate::app_state::AppState;
use crate::domain::{WarehouseName, WarehouseSummary};
use crate::error::GatewayError;

const NUMBERS_REQUIRED: &str = "Capacity and initial balance must be numbers";
const NAME_REQUIRED: &str = "Name is required";
const NAME_TAKEN: &str = "A warehouse with this name already exists";
const CAPACITY_NOT_NUMBER: &str = "Capacity must be a number";
const AMOUNT_NOT_NUMBER: &str = "Amount must be a number";

/// Fields of the creation form.
#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    /// Warehouse name.
    #[serde(default)]
    pub name: String,
    /// Capacity as typed. Missing counts as `0`.
    pub capacity: Option<String>,
    /// Initial balance as typed. Missing counts as `0`.
    pub initial_balance: Option<String>,
}

/// Fields of the capacity change form.
#[derive(Debug, Default, Deserialize)]
pub struct CapacityForm {
    /// New capacity as typed. Missing counts as `0`.
    pub capacity: Option<String>,
}

/// Fields of the deposit and withdrawal forms.
#[derive(Debug, Default, Deserialize)]
pub struct AmountForm {
    /// Amount as typed. Missing counts as `0`.
    pub amount: Option<String>,
}

/// `302 Found` with a `Location` header.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

fn home() -> Response {
    found("/")
}

/// Loads a warehouse, or `None` if it does not exist.
async fn lookup(state: &AppState, name: &str) -> Option<WarehouseSummary> {
    state.warehouse_service.get_warehouse(name).await.ok()
}

/// `GET /` — List all warehouses.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let listing = state.warehouse_service.list_warehouses().await;
    Html(render::index_page(&listing))
}

/// `GET /create` — Show the creation form.
pub async fn create_form() -> Html<String> {
    Html(render::create_page(None, ""))
}

/// `POST /create` — Create a warehouse and go back to the list.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<CreateForm>,
) -> Response {
    let numbers = parse_number_or_zero("capacity", form.capacity.as_deref()).and_then(|capacity| {
        parse_number_or_zero("initial_balance", form.initial_balance.as_deref())
            .map(|balance| (capacity, balance))
    });
    let Ok((capacity, initial_balance)) = numbers else {
        return Html(render::create_page(Some(NUMBERS_REQUIRED), &form.name)).into_response();
    };
    let Ok(name) = WarehouseName::parse(&form.name) else {
        return Html(render::create_page(Some(NAME_REQUIRED), &form.name)).into_response();
    };
    match state
        .warehouse_service
        .create_warehouse(name, capacity, initial_balance)
        .await
    {
        Ok(_) => home(),
        Err(GatewayError::DuplicateName(_)) => {
            Html(render::create_page(Some(NAME_TAKEN), &form.name)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// `GET /warehouse/{name}` — Show one warehouse.
pub async fn view(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match lookup(&state, &name).await {
        Some(summary) => Html(render::view_page(&summary)).into_response(),
        None => home(),
    }
}

/// `GET /warehouse/{name}/modify` — Show the capacity form.
pub async fn modify_form(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match lookup(&state, &name).await {
        Some(summary) => Html(render::modify_page(&summary, None)).into_response(),
        None => home(),
    }
}

/// `POST /warehouse/{name}/modify` — Change the capacity.
pub async fn modify_submit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<CapacityForm>,
) -> Response {
    let Some(summary) = lookup(&state, &name).await else {
        return home();
    };
    let Ok(capacity) = parse_number_or_zero("capacity", form.capacity.as_deref()) else {
        return Html(render::modify_page(&summary, Some(CAPACITY_NOT_NUMBER))).into_response();
    };
    match state.warehouse_service.resize(&name, capacity).await {
        Ok(_) => found(&render::warehouse_url(&name)),
        Err(_) => home(),
    }
}

/// `GET /warehouse/{name}/add` — Show the deposit form.
pub async fn add_form(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match lookup(&state, &name).await {
        Some(summary) => Html(render::add_page(&summary, None)).into_response(),
        None => home(),
    }
}

/// `POST /warehouse/{name}/add` — Deposit items.
pub async fn add_submit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<AmountForm>,
) -> Response {
    let Some(summary) = lookup(&state, &name).await else {
        return home();
    };
    let Ok(amount) = parse_number_or_zero("amount", form.amount.as_deref()) else {
        return Html(render::add_page(&summary, Some(AMOUNT_NOT_NUMBER))).into_response();
    };
    match state.warehouse_service.deposit(&name, amount).await {
        Ok(_) => found(&render::warehouse_url(&name)),
        Err(_) => home(),
    }
}

/// `GET /warehouse/{name}/take` — Show the withdrawal form.
pub async fn take_form(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match lookup(&state, &name).await {
        Some(summary) => Html(render::take_page(&summary, None, None)).into_response(),
        None => home(),
    }
}

/// `POST /warehouse/{name}/take` — Withdraw items and report how many
/// were actually taken.
pub async fn take_submit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<AmountForm>,
) -> Response {
    let Some(summary) = lookup(&state, &name).await else {
        return home();
    };
    let Ok(amount) = parse_number_or_zero("amount", form.amount.as_deref()) else {
        return Html(render::take_page(&summary, Some(AMOUNT_NOT_NUMBER), None)).into_response();
    };
    match state.warehouse_service.withdraw(&name, amount).await {
        Ok(outcome) => {
            let message = format!("Took {} items from the warehouse", outcome.removed);
            Html(render::take_page(&outcome.warehouse, None, Some(&message))).into_response()
        }
        Err(_) => home(),
    }
}

/// `GET /search?q=` — Search warehouses by name.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = params.q.unwrap_or_default();
    let outcome = state.warehouse_service.search_warehouses(&query).await;
    Html(render::search_page(&outcome))
}
