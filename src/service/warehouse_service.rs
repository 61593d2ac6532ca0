//! Warehouse service: orchestrates warehouse operations and emits events.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::{
    BoundedPool, EventBus, SearchOutcome, WarehouseEntry, WarehouseEvent, WarehouseName,
    WarehouseRegistry, WarehouseSummary,
};
use crate::error::GatewayError;

/// Result of a deposit request.
#[derive(Debug, Clone, Serialize)]
pub struct DepositOutcome {
    /// Amount actually added to the level.
    pub accepted: f64,
    /// Requested amount that did not fit (zero for non-positive requests).
    pub discarded: f64,
    /// Warehouse state after the deposit.
    pub warehouse: WarehouseSummary,
}

/// Result of a withdrawal request.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawOutcome {
    /// Amount actually removed from the level.
    pub removed: f64,
    /// Warehouse state after the withdrawal.
    pub warehouse: WarehouseSummary,
}

/// Orchestration layer for all warehouse operations.
///
/// Stateless coordinator: owns references to [`WarehouseRegistry`] for
/// state and [`EventBus`] for event emission. Every mutation method
/// follows the pattern: acquire lock → call [`BoundedPool`] → update
/// metadata → release lock → emit event → return result.
#[derive(Debug, Clone)]
pub struct WarehouseService {
    registry: Arc<WarehouseRegistry>,
    event_bus: EventBus,
}

impl WarehouseService {
    /// Creates a new `WarehouseService`.
    #[must_use]
    pub fn new(registry: Arc<WarehouseRegistry>, event_bus: EventBus) -> Self {
        Self {
            registry,
            event_bus,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a reference to the inner [`WarehouseRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<WarehouseRegistry> {
        &self.registry
    }

    /// Creates a new warehouse. Capacity and level are clamped, never
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DuplicateName`] if the name is taken.
    pub async fn create_warehouse(
        &self,
        name: WarehouseName,
        capacity: f64,
        initial_balance: f64,
    ) -> Result<WarehouseSummary, GatewayError> {
        let pool = BoundedPool::with_level(capacity, initial_balance);
        let entry = WarehouseEntry::new(name.clone(), pool);
        let summary = self.registry.insert(entry).await?;

        let _ = self.event_bus.publish(WarehouseEvent::WarehouseCreated {
            warehouse: name,
            capacity: pool.capacity(),
            balance: pool.level(),
            timestamp: Utc::now(),
        });

        tracing::info!(
            warehouse = %summary.name,
            capacity = pool.capacity(),
            balance = pool.level(),
            "warehouse created"
        );
        Ok(summary)
    }

    /// Returns the current state of one warehouse.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WarehouseNotFound`] if the name is unknown.
    pub async fn get_warehouse(&self, name: &str) -> Result<WarehouseSummary, GatewayError> {
        let entry_lock = self.registry.get(name).await?;
        let entry = entry_lock.read().await;
        Ok(WarehouseSummary::from(&*entry))
    }

    /// Changes the capacity of a warehouse, truncating its level if the new
    /// capacity is below it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WarehouseNotFound`] if the name is unknown.
    pub async fn resize(
        &self,
        name: &str,
        new_capacity: f64,
    ) -> Result<WarehouseSummary, GatewayError> {
        let entry_lock = self.registry.get(name).await?;
        let mut entry = entry_lock.write().await;

        let old_capacity = entry.pool.capacity();
        let level_before = entry.pool.level();
        entry.pool.resize(new_capacity);
        entry.touch();

        let summary = WarehouseSummary::from(&*entry);
        drop(entry);

        let truncated = level_before - summary.balance;
        if truncated > 0.0 {
            tracing::warn!(
                warehouse = %summary.name,
                truncated,
                "capacity shrink truncated level"
            );
        }

        let _ = self.event_bus.publish(WarehouseEvent::CapacityChanged {
            warehouse: summary.name.clone(),
            old_capacity,
            new_capacity: summary.capacity,
            truncated,
            balance: summary.balance,
            timestamp: Utc::now(),
        });

        tracing::info!(
            warehouse = %summary.name,
            old_capacity,
            new_capacity = summary.capacity,
            "warehouse resized"
        );
        Ok(summary)
    }

    /// Deposits into a warehouse. Non-positive amounts are ignored and
    /// overflow beyond capacity is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WarehouseNotFound`] if the name is unknown.
    pub async fn deposit(&self, name: &str, amount: f64) -> Result<DepositOutcome, GatewayError> {
        let entry_lock = self.registry.get(name).await?;
        let mut entry = entry_lock.write().await;

        let level_before = entry.pool.level();
        entry.pool.deposit(amount);
        let accepted = entry.pool.level() - level_before;
        if accepted > 0.0 {
            entry.deposit_count = entry.deposit_count.saturating_add(1);
            entry.total_deposited += accepted;
            entry.touch();
        }

        let summary = WarehouseSummary::from(&*entry);
        drop(entry);

        let discarded = if amount > 0.0 { amount - accepted } else { 0.0 };

        let _ = self.event_bus.publish(WarehouseEvent::ItemsDeposited {
            warehouse: summary.name.clone(),
            requested: amount,
            accepted,
            balance: summary.balance,
            timestamp: Utc::now(),
        });

        tracing::debug!(
            warehouse = %summary.name,
            requested = amount,
            accepted,
            discarded,
            "deposit applied"
        );
        Ok(DepositOutcome {
            accepted,
            discarded,
            warehouse: summary,
        })
    }

    /// Withdraws up to `amount` from a warehouse and reports what was
    /// actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WarehouseNotFound`] if the name is unknown.
    pub async fn withdraw(
        &self,
        name: &str,
        amount: f64,
    ) -> Result<WithdrawOutcome, GatewayError> {
        let entry_lock = self.registry.get(name).await?;
        let mut entry = entry_lock.write().await;

        let removed = entry.pool.withdraw(amount);
        if removed > 0.0 {
            entry.withdrawal_count = entry.withdrawal_count.saturating_add(1);
            entry.total_withdrawn += removed;
            entry.touch();
        }

        let summary = WarehouseSummary::from(&*entry);
        drop(entry);

        let _ = self.event_bus.publish(WarehouseEvent::ItemsWithdrawn {
            warehouse: summary.name.clone(),
            requested: amount,
            removed,
            balance: summary.balance,
            timestamp: Utc::now(),
        });

        tracing::debug!(
            warehouse = %summary.name,
            requested = amount,
            removed,
            "withdrawal applied"
        );
        Ok(WithdrawOutcome {
            removed,
            warehouse: summary,
        })
    }

    /// Removes a warehouse from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WarehouseNotFound`] if the name is unknown.
    pub async fn remove_warehouse(&self, name: &str) -> Result<(), GatewayError> {
        let summary = self.registry.remove(name).await?;
        self.publish_removed(summary);

        tracing::info!(warehouse = name, "warehouse removed");
        Ok(())
    }

    fn publish_removed(&self, summary: WarehouseSummary) {
        let _ = self.event_bus.publish(WarehouseEvent::WarehouseRemoved {
            final_balance: summary.balance,
            warehouse: summary.name,
            timestamp: Utc::now(),
        });
    }

    /// Returns summaries of all warehouses in insertion order.
    pub async fn list_warehouses(&self) -> Vec<WarehouseSummary> {
        self.registry.list().await
    }

    /// Case-insensitive substring search over warehouse names.
    pub async fn search_warehouses(&self, query: &str) -> SearchOutcome {
        self.registry.search(query).await
    }

    /// Drops every warehouse, publishing one `warehouse_removed` event per
    /// warehouse. Returns how many were removed.
    pub async fn reset(&self) -> usize {
        let removed = self.registry.clear().await;
        let dropped = removed.len();
        for summary in removed {
            self.publish_removed(summary);
        }
        tracing::warn!(dropped, "warehouse registry reset");
        dropped
    }
}
