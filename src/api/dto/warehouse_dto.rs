//! Warehouse DTOs for create, get, list, and search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::input::NumberInput;
use crate::domain::{SearchOutcome, WarehouseSummary};

/// Request body for `POST /warehouses`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWarehouseRequest {
    /// Display name. Trimmed; must be non-empty and unique.
    pub name: String,
    /// Requested capacity. Negative values are clamped to zero.
    pub capacity: NumberInput,
    /// Requested initial balance, clamped into `[0, capacity]`. Defaults to 0.
    #[serde(default)]
    pub initial_balance: Option<NumberInput>,
}

/// Full warehouse state as returned by every warehouse endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseDto {
    /// Warehouse name.
    pub name: String,
    /// Maximum balance.
    pub capacity: f64,
    /// Current balance.
    pub balance: f64,
    /// `capacity - balance`.
    pub available_space: f64,
    /// Human-readable summary of balance and headroom.
    pub summary: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Number of accepted deposits.
    pub deposit_count: u64,
    /// Number of effective withdrawals.
    pub withdrawal_count: u64,
}

impl From<WarehouseSummary> for WarehouseDto {
    fn from(summary: WarehouseSummary) -> Self {
        Self {
            name: summary.name.into(),
            capacity: summary.capacity,
            balance: summary.balance,
            available_space: summary.available_space,
            summary: summary.summary,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
            deposit_count: summary.deposit_count,
            withdrawal_count: summary.withdrawal_count,
        }
    }
}

/// List response for `GET /warehouses`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseListResponse {
    /// Warehouses in creation order.
    pub data: Vec<WarehouseDto>,
    /// Number of warehouses.
    pub total: usize,
}

/// Query parameters for `GET /search`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring to look for in warehouse names.
    #[serde(default)]
    pub q: Option<String>,
}

/// Response body for `GET /search`.
///
/// `query` is `null` when no search term was given; `results` is then
/// empty.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Trimmed search term, if one was given.
    pub query: Option<String>,
    /// Matching warehouses in creation order.
    pub results: Vec<WarehouseDto>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::NoQuery => Self {
                query: None,
                results: Vec::new(),
            },
            SearchOutcome::Results { query, matches } => Self {
                query: Some(query),
                results: matches.into_iter().map(WarehouseDto::from).collect(),
            },
        }
    }
}
