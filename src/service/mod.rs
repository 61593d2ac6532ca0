//! Service layer: business logic orchestration.
//!
//! [`WarehouseService`] coordinates warehouse operations, delegates the
//! clamping arithmetic to [`crate::domain::BoundedPool`], and emits events
//! through the [`crate::domain::EventBus`].

pub mod warehouse_service;

pub use warehouse_service::{DepositOutcome, WarehouseService, WithdrawOutcome};
