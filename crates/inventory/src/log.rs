//! Caller-owned log of add operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemName;

/// Record of one successful `add_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLogEntry {
    pub occurred_at: DateTime<Utc>,
    pub quantity: i64,
    pub item: ItemName,
}

impl StockLogEntry {
    pub fn added(item: ItemName, quantity: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            occurred_at,
            quantity,
            item,
        }
    }
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.occurred_at, self.quantity, self.item)
    }
}

/// Append-only sink for [`StockLogEntry`] records.
///
/// The inventory never keeps a sink of its own; callers pass one per call.
pub trait StockLog {
    fn record(&mut self, entry: StockLogEntry);
}

impl StockLog for Vec<StockLogEntry> {
    fn record(&mut self, entry: StockLogEntry) {
        self.push(entry);
    }
}
