//! Deposit, withdrawal, and capacity change DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::warehouse_dto::WarehouseDto;
use crate::api::input::NumberInput;
use crate::service::{DepositOutcome, WithdrawOutcome};

/// Request body for `POST /warehouses/{name}/deposit` and `/withdraw`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AmountRequest {
    /// Requested amount. Non-positive amounts are accepted and have no
    /// effect.
    pub amount: NumberInput,
}

/// Request body for `PUT /warehouses/{name}/capacity`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResizeRequest {
    /// New capacity. Negative values are clamped to zero; a capacity below
    /// the current balance truncates the balance.
    pub capacity: NumberInput,
}

/// Response body for `POST /warehouses/{name}/deposit`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DepositResponse {
    /// Amount added to the balance.
    pub accepted: f64,
    /// Amount that did not fit and was dropped.
    pub discarded: f64,
    /// Warehouse state after the deposit.
    pub warehouse: WarehouseDto,
}

impl From<DepositOutcome> for DepositResponse {
    fn from(outcome: DepositOutcome) -> Self {
        Self {
            accepted: outcome.accepted,
            discarded: outcome.discarded,
            warehouse: outcome.warehouse.into(),
        }
    }
}

/// Response body for `POST /warehouses/{name}/withdraw`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawResponse {
    /// Amount actually removed, at most the previous balance.
    pub removed: f64,
    /// Warehouse state after the withdrawal.
    pub warehouse: WarehouseDto,
}

impl From<WithdrawOutcome> for WithdrawResponse {
    fn from(outcome: WithdrawOutcome) -> Self {
        Self {
            removed: outcome.removed,
            warehouse: outcome.warehouse.into(),
        }
    }
}
