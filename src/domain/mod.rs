//! Domain layer: the bounded storage unit, the warehouse registry, and the
//! event system.
//!
//! [`BoundedPool`] carries the only numeric contract in the crate. The
//! remaining types add naming, metadata, concurrent storage, search, and
//! change notification around it.

pub mod bounded_pool;
pub mod event_bus;
pub mod search;
pub mod warehouse_entry;
pub mod warehouse_event;
pub mod warehouse_name;
pub mod warehouse_registry;

pub use bounded_pool::BoundedPool;
pub use event_bus::EventBus;
pub use search::SearchOutcome;
pub use warehouse_entry::{WarehouseEntry, WarehouseSummary};
pub use warehouse_event::WarehouseEvent;
pub use warehouse_name::WarehouseName;
pub use warehouse_registry::WarehouseRegistry;
