//! Name-keyed warehouse storage with per-entry locking.
//!
//! [`WarehouseRegistry`] stores all warehouses in a `HashMap` where each
//! entry is individually protected by a [`tokio::sync::RwLock`]. This
//! allows concurrent reads on the same warehouse and concurrent writes on
//! different warehouses.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use super::WarehouseName;
use super::search::{self, SearchOutcome};
use super::warehouse_entry::{WarehouseEntry, WarehouseSummary};
use crate::error::GatewayError;

/// Process-wide store for all warehouses.
///
/// Uses a `RwLock<HashMap<...>>` for the outer map and per-entry
/// `Arc<RwLock<WarehouseEntry>>` for fine-grained locking. Starts empty and
/// is only ever emptied again through [`WarehouseRegistry::clear`].
///
/// # Concurrency
///
/// - Multiple tasks may read the same warehouse concurrently.
/// - Writes to different warehouses are concurrent.
/// - Writes to the same warehouse are serialized.
#[derive(Debug)]
pub struct WarehouseRegistry {
    warehouses: RwLock<HashMap<WarehouseName, Arc<RwLock<WarehouseEntry>>>>,
    next_sequence: AtomicU64,
}

impl WarehouseRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            warehouses: RwLock::new(HashMap::new()),
            next_sequence: AtomicU64::new(0),
        }
    }

    /// Inserts a new warehouse, stamping it with the next sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DuplicateName`] if a warehouse with the same
    /// name already exists. The existing entry is left untouched.
    pub async fn insert(&self, mut entry: WarehouseEntry) -> Result<WarehouseSummary, GatewayError> {
        let mut map = self.warehouses.write().await;
        if map.contains_key(&entry.name) {
            return Err(GatewayError::DuplicateName(entry.name.to_string()));
        }
        entry.sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        let summary = WarehouseSummary::from(&entry);
        map.insert(entry.name.clone(), Arc::new(RwLock::new(entry)));
        Ok(summary)
    }

    /// Returns the warehouse entry behind its own lock.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WarehouseNotFound`] if no warehouse has the
    /// given name.
    pub async fn get(&self, name: &str) -> Result<Arc<RwLock<WarehouseEntry>>, GatewayError> {
        let map = self.warehouses.read().await;
        map.get(name)
            .cloned()
            .ok_or_else(|| GatewayError::WarehouseNotFound(name.to_string()))
    }

    /// Returns `true` if a warehouse with the given name exists.
    pub async fn contains(&self, name: &str) -> bool {
        self.warehouses.read().await.contains_key(name)
    }

    /// Removes a warehouse and returns a snapshot of its final state.
    ///
    /// The entry leaves the map first; handles other tasks still hold stay
    /// valid but are no longer reachable by name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WarehouseNotFound`] if no warehouse has the
    /// given name.
    pub async fn remove(&self, name: &str) -> Result<WarehouseSummary, GatewayError> {
        let entry_lock = self
            .warehouses
            .write()
            .await
            .remove(name)
            .ok_or_else(|| GatewayError::WarehouseNotFound(name.to_string()))?;
        let entry = entry_lock.read().await;
        Ok(WarehouseSummary::from(&*entry))
    }

    /// Returns summaries of all warehouses in insertion order.
    pub async fn list(&self) -> Vec<WarehouseSummary> {
        let map = self.warehouses.read().await;
        let mut summaries = Vec::with_capacity(map.len());
        for entry_lock in map.values() {
            let entry = entry_lock.read().await;
            summaries.push(WarehouseSummary::from(&*entry));
        }
        summaries.sort_by_key(|s| s.sequence);
        summaries
    }

    /// Filters the listing by case-insensitive substring match on name.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        search::search(self.list().await, query)
    }

    /// Removes every warehouse and returns their final snapshots in
    /// insertion order.
    pub async fn clear(&self) -> Vec<WarehouseSummary> {
        let drained: Vec<_> = self.warehouses.write().await.drain().map(|(_, v)| v).collect();
        let mut summaries = Vec::with_capacity(drained.len());
        for entry_lock in drained {
            summaries.push(WarehouseSummary::from(&*entry_lock.read().await));
        }
        summaries.sort_by_key(|s| s.sequence);
        summaries
    }

    /// Returns the number of warehouses in the registry.
    pub async fn len(&self) -> usize {
        self.warehouses.read().await.len()
    }

    /// Returns `true` if the registry contains no warehouses.
    pub async fn is_empty(&self) -> bool {
        self.warehouses.read().await.is_empty()
    }
}

impl Default for WarehouseRegistry {
    fn default() -> Self {
        Self::new()
    }
}
