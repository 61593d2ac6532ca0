//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::{EventBus, WarehouseRegistry};
use crate::service::WarehouseService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Owns the process-wide warehouse registry through the service. The
/// registry starts empty and is never persisted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Warehouse service for all business logic.
    pub warehouse_service: Arc<WarehouseService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}

impl AppState {
    /// Builds a fresh state with an empty registry.
    #[must_use]
    pub fn new(event_bus_capacity: usize) -> Self {
        let registry = Arc::new(WarehouseRegistry::new());
        let event_bus = EventBus::new(event_bus_capacity);
        let warehouse_service = Arc::new(WarehouseService::new(registry, event_bus.clone()));
        Self {
            warehouse_service,
            event_bus,
        }
    }
}
