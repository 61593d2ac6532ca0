//! Broadcast channel for domain events.
//!
//! [`EventBus`] wraps a [`tokio::sync::broadcast`] channel. Every state
//! mutation publishes a [`WarehouseEvent`] through the bus, and all
//! WebSocket connections subscribe to receive filtered events.

use tokio::sync::broadcast;

use super::WarehouseEvent;

/// Broadcast bus for [`WarehouseEvent`]s.
///
/// When the ring buffer is full, the oldest events are dropped for lagging
/// receivers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<WarehouseEvent>,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event and returns how many receivers got it.
    ///
    /// With nobody listening the event is dropped and `0` is returned.
    pub fn publish(&self, event: WarehouseEvent) -> usize {
        let kind = event.event_type_str();
        let warehouse = event.warehouse().to_string();
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!(event = kind, %warehouse, delivered, "warehouse event published");
        delivered
    }

    /// Creates a new receiver that will receive all future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WarehouseEvent> {
        self.sender.subscribe()
    }

    /// Returns the current number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
