//! Case-insensitive name search over a warehouse listing.

use serde::Serialize;

use super::warehouse_entry::WarehouseSummary;

/// Result of a name search.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The query was empty or whitespace only. No filtering happened.
    NoQuery,
    /// The query was applied. `matches` may be empty.
    Results {
        /// Trimmed query as entered.
        query: String,
        /// Matching warehouses, in listing order.
        matches: Vec<WarehouseSummary>,
    },
}

impl SearchOutcome {
    /// Returns the matches, or an empty slice for [`SearchOutcome::NoQuery`].
    #[must_use]
    pub fn matches(&self) -> &[WarehouseSummary] {
        match self {
            Self::NoQuery => &[],
            Self::Results { matches, .. } => matches,
        }
    }

    /// Returns the applied query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::NoQuery => None,
            Self::Results { query, .. } => Some(query),
        }
    }
}

/// Filters `listing` to the warehouses whose name contains `query`,
/// ignoring case. Order is preserved.
#[must_use]
pub fn search(listing: Vec<WarehouseSummary>, query: &str) -> SearchOutcome {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::NoQuery;
    }
    let needle = query.to_lowercase();
    let matches = listing
        .into_iter()
        .filter(|summary| summary.name.contains_ignore_case(&needle))
        .collect();
    SearchOutcome::Results {
        query: query.to_string(),
        matches,
    }
}
