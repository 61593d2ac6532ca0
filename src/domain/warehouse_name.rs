//! Validated warehouse display name.
//!
//! [`WarehouseName`] is the registry key. It is trimmed on construction,
//! must be non-empty, and compares case-sensitively.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Unique, human-readable warehouse name.
///
/// Used as the key in [`super::WarehouseRegistry`], as the event
/// discriminator, and as the WebSocket subscription target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WarehouseName(String);

impl WarehouseName {
    /// Builds a name from raw user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NameRequired`] if nothing is left after
    /// trimming.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GatewayError::NameRequired);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(needle)
    }
}

impl fmt::Display for WarehouseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WarehouseName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WarehouseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WarehouseName {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WarehouseName> for String {
    fn from(name: WarehouseName) -> Self {
        name.0
    }
}
