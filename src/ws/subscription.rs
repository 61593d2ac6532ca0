//! Which warehouses a WebSocket client wants to hear about.
//!
//! Filtering happens on the server, so a client only receives events for
//! names it asked for, or for everything once it sent `"*"`.

use std::collections::HashSet;

use crate::domain::WarehouseName;

/// Subscription state of one WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Names asked for explicitly.
    warehouses: HashSet<WarehouseName>,
    /// Set by `"*"`; overrides the name set while active.
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// No subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds names to the subscription set. `wildcard` enables `"*"`.
    pub fn subscribe(&mut self, names: &[WarehouseName], wildcard: bool) {
        if wildcard {
            self.subscribe_all = true;
        }
        self.warehouses.extend(names.iter().cloned());
    }

    /// Removes names from the subscription set. `wildcard` clears `"*"`.
    pub fn unsubscribe(&mut self, names: &[WarehouseName], wildcard: bool) {
        if wildcard {
            self.subscribe_all = false;
        }
        for name in names {
            self.warehouses.remove(name);
        }
    }

    /// Whether an event about `name` goes to this client.
    #[must_use]
    pub fn matches(&self, name: &WarehouseName) -> bool {
        self.subscribe_all || self.warehouses.contains(name)
    }

    /// Explicit names held, not counting the wildcard.
    #[must_use]
    pub fn count(&self) -> usize {
        self.warehouses.len()
    }

    /// Whether `"*"` is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}

/// Splits raw subscription targets into valid names and the wildcard flag.
///
/// Blank entries are skipped.
#[must_use]
pub fn parse_targets(raw: &[String]) -> (Vec<WarehouseName>, bool) {
    let mut names = Vec::with_capacity(raw.len());
    let mut wildcard = false;
    for target in raw {
        if target.trim() == "*" {
            wildcard = true;
        } else if let Ok(name) = WarehouseName::parse(target) {
            names.push(name);
        }
    }
    (names, wildcard)
}
