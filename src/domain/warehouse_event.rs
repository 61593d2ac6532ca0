//! Domain events reflecting warehouse state mutations.
//!
//! Every state change emits a [`WarehouseEvent`] through the
//! [`super::EventBus`]. Events are broadcast to WebSocket subscribers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::WarehouseName;

/// Domain event emitted after every state mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum WarehouseEvent {
    /// Emitted when a new warehouse is created.
    WarehouseCreated {
        /// Warehouse name.
        warehouse: WarehouseName,
        /// Clamped capacity.
        capacity: f64,
        /// Clamped initial level.
        balance: f64,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a warehouse is removed.
    WarehouseRemoved {
        /// Warehouse name.
        warehouse: WarehouseName,
        /// Level held at removal.
        final_balance: f64,
        /// Removal timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after the capacity changes.
    CapacityChanged {
        /// Warehouse name.
        warehouse: WarehouseName,
        /// Capacity before the change.
        old_capacity: f64,
        /// Clamped capacity after the change.
        new_capacity: f64,
        /// Level lost because the new capacity was below it.
        truncated: f64,
        /// Level after the change.
        balance: f64,
        /// Timestamp of the change.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a deposit request.
    ItemsDeposited {
        /// Warehouse name.
        warehouse: WarehouseName,
        /// Amount the client asked to deposit.
        requested: f64,
        /// Amount actually added.
        accepted: f64,
        /// Level after the deposit.
        balance: f64,
        /// Timestamp of the deposit.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a withdrawal request.
    ItemsWithdrawn {
        /// Warehouse name.
        warehouse: WarehouseName,
        /// Amount the client asked for.
        requested: f64,
        /// Amount actually removed.
        removed: f64,
        /// Level after the withdrawal.
        balance: f64,
        /// Timestamp of the withdrawal.
        timestamp: DateTime<Utc>,
    },
}

impl WarehouseEvent {
    /// Returns the warehouse this event concerns.
    #[must_use]
    pub fn warehouse(&self) -> &WarehouseName {
        match self {
            Self::WarehouseCreated { warehouse, .. }
            | Self::WarehouseRemoved { warehouse, .. }
            | Self::CapacityChanged { warehouse, .. }
            | Self::ItemsDeposited { warehouse, .. }
            | Self::ItemsWithdrawn { warehouse, .. } => warehouse,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::WarehouseCreated { .. } => "warehouse_created",
            Self::WarehouseRemoved { .. } => "warehouse_removed",
            Self::CapacityChanged { .. } => "capacity_changed",
            Self::ItemsDeposited { .. } => "items_deposited",
            Self::ItemsWithdrawn { .. } => "items_withdrawn",
        }
    }
}
