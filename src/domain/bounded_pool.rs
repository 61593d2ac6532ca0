//! Bounded storage unit with a fixed capacity and a clamped fill level.
//!
//! [`BoundedPool`] never rejects a numeric input. Out-of-range values are
//! clamped into range, and withdrawals report how much was actually removed.

use std::fmt;

use serde::Serialize;

/// A storage unit holding a `level` that always lies in `[0, capacity]`.
///
/// # Invariants
///
/// - `capacity >= 0`
/// - `0 <= level <= capacity`
///
/// Both hold after construction and after every operation, whatever values
/// the caller passes in. A NaN input counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundedPool {
    capacity: f64,
    level: f64,
}

impl BoundedPool {
    /// Creates an empty pool with the given capacity.
    ///
    /// Negative capacities are clamped to zero.
    #[must_use]
    pub fn new(capacity: f64) -> Self {
        Self::with_level(capacity, 0.0)
    }

    /// Creates a pool with the given capacity and initial level.
    ///
    /// The capacity is clamped first, then the level is clamped into
    /// `[0, capacity]` using the clamped capacity.
    #[must_use]
    pub fn with_level(capacity: f64, initial_level: f64) -> Self {
        let capacity = non_negative(capacity);
        let level = non_negative(initial_level).min(capacity);
        Self { capacity, level }
    }

    /// Maximum level the pool may hold.
    #[must_use]
    pub const fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Current fill level.
    #[must_use]
    pub const fn level(&self) -> f64 {
        self.level
    }

    /// Remaining headroom, `capacity - level`.
    #[must_use]
    pub fn available_space(&self) -> f64 {
        self.capacity - self.level
    }

    /// Adds `amount` to the pool.
    ///
    /// Non-positive amounts are ignored. Anything beyond the capacity is
    /// discarded.
    pub fn deposit(&mut self, amount: f64) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        self.level = (self.level + amount).min(self.capacity);
    }

    /// Removes up to `amount` from the pool and returns what was removed.
    ///
    /// Non-positive amounts remove nothing and return `0`. Asking for more
    /// than the current level empties the pool and returns the old level.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let removed = amount.min(self.level);
        self.level -= removed;
        removed
    }

    /// Changes the capacity, truncating the level if it no longer fits.
    ///
    /// Negative capacities are clamped to zero.
    pub fn resize(&mut self, new_capacity: f64) {
        self.capacity = non_negative(new_capacity);
        if self.level > self.capacity {
            self.level = self.capacity;
        }
    }

    /// Human-readable summary: `level = <level>, remaining capacity <space>`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoundedPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level = {}, remaining capacity {}",
            self.level,
            self.available_space()
        )
    }
}

/// Clamps `value` to `>= 0`, mapping NaN to zero.
fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
