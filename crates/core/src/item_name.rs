//! Item names: the keys of the inventory mapping.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::StockError;

/// Name of a tracked item.
///
/// The only rule is that the name is non-empty. Whitespace is kept as-is, so
/// `" "` and `"apple "` are distinct, valid names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() { None } else { Some(Self(name)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = StockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| StockError::invalid_item_name("item name cannot be empty"))
    }
}

impl FromStr for ItemName {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}
