//! Warehouse entry combining a [`BoundedPool`] with server-side metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{BoundedPool, WarehouseName};

/// Aggregate wrapping a [`BoundedPool`] with gateway metadata.
///
/// Each warehouse in the registry is stored as a `WarehouseEntry`. The
/// `pool` field holds the live capacity and level while the remaining
/// fields track operational metadata.
#[derive(Debug)]
pub struct WarehouseEntry {
    /// Warehouse name (immutable after creation).
    pub name: WarehouseName,

    /// The storage unit. Updated on deposit, withdraw and resize.
    pub pool: BoundedPool,

    /// Registry insertion order, used for stable listings.
    pub sequence: u64,

    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,

    /// Timestamp of last state mutation.
    pub last_modified_at: DateTime<Utc>,

    /// Number of accepted deposits.
    pub deposit_count: u64,

    /// Number of withdrawals that removed something.
    pub withdrawal_count: u64,

    /// Cumulative amount accepted by deposits.
    pub total_deposited: f64,

    /// Cumulative amount removed by withdrawals.
    pub total_withdrawn: f64,
}

impl WarehouseEntry {
    /// Creates a new `WarehouseEntry` around the given pool.
    ///
    /// The sequence number is assigned by the registry on insert.
    #[must_use]
    pub fn new(name: WarehouseName, pool: BoundedPool) -> Self {
        let now = Utc::now();
        Self {
            name,
            pool,
            sequence: 0,
            created_at: now,
            last_modified_at: now,
            deposit_count: 0,
            withdrawal_count: 0,
            total_deposited: 0.0,
            total_withdrawn: 0.0,
        }
    }

    /// Marks the entry as modified now.
    pub fn touch(&mut self) {
        self.last_modified_at = Utc::now();
    }
}

/// Point-in-time snapshot of a warehouse for listings and responses.
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseSummary {
    /// Warehouse name.
    pub name: WarehouseName,
    /// Maximum level.
    pub capacity: f64,
    /// Current level.
    pub balance: f64,
    /// `capacity - balance`.
    pub available_space: f64,
    /// `BoundedPool::describe` output.
    pub summary: String,
    /// Registry insertion order.
    pub sequence: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Number of accepted deposits.
    pub deposit_count: u64,
    /// Number of effective withdrawals.
    pub withdrawal_count: u64,
}

impl From<&WarehouseEntry> for WarehouseSummary {
    fn from(entry: &WarehouseEntry) -> Self {
        Self {
            name: entry.name.clone(),
            capacity: entry.pool.capacity(),
            balance: entry.pool.level(),
            available_space: entry.pool.available_space(),
            summary: entry.pool.describe(),
            sequence: entry.sequence,
            created_at: entry.created_at,
            updated_at: entry.last_modified_at,
            deposit_count: entry.deposit_count,
            withdrawal_count: entry.withdrawal_count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_pool_state() {
        let Ok(name) = WarehouseName::parse("Depot") else {
            panic!("valid name");
        };
        let entry = WarehouseEntry::new(name, BoundedPool::with_level(100.0, 25.0));
        let summary = WarehouseSummary::from(&entry);
        assert_eq!(summary.name.as_str(), "Depot");
        assert!((summary.capacity - 100.0).abs() < f64::EPSILON);
        assert!((summary.balance - 25.0).abs() < f64::EPSILON);
        assert!((summary.available_space - 75.0).abs() < f64::EPSILON);
        assert_eq!(summary.summary, "level = 25, remaining capacity 75");
        assert_eq!(summary.created_at, summary.updated_at);
    }

    #[test]
    fn touch_advances_modified_timestamp() {
        let Ok(name) = WarehouseName::parse("Depot") else {
            panic!("valid name");
        };
        let mut entry = WarehouseEntry::new(name, BoundedPool::new(1.0));
        let before = entry.last_modified_at;
        entry.touch();
        assert!(entry.last_modified_at >= before);
        assert_eq!(entry.created_at, before);
    }
}
