//! The inventory mapping and its stock operations.

use std::collections::HashMap;

use chrono::Utc;

use stockroom_core::{ItemName, StockError, StockResult};

use crate::log::{StockLog, StockLogEntry};

/// Threshold used by `check_low_items` when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Result of a successful `remove_item`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item is still stocked with this quantity.
    Remaining(i64),
    /// The quantity reached zero or below and the entry was deleted.
    Depleted,
}

/// Item name → quantity mapping for a single location.
///
/// Iteration follows insertion order: new items are appended, and an item that
/// is deleted and added again moves to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    quantities: HashMap<String, i64>,
    order: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` to `item`, creating the entry at 0 if absent.
    ///
    /// An empty item name is ignored. On success, one entry is recorded in
    /// `log` when a sink is supplied. The stored quantity is never deleted here,
    /// even when `qty` is negative.
    pub fn add_item(
        &mut self,
        item: &str,
        qty: i64,
        log: Option<&mut dyn StockLog>,
    ) -> StockResult<()> {
        let Some(name) = ItemName::new(item) else {
            tracing::debug!("ignoring add with an empty item name");
            return Ok(());
        };

        let current = self.get_qty(item);
        let updated = current.checked_add(qty).ok_or_else(|| {
            StockError::invalid_quantity(format!("adding {qty} to {current} of '{name}' overflows"))
        })?;
        self.set(name.as_str(), updated);
        tracing::debug!(item = %name, qty, quantity = updated, "stock added");

        if let Some(log) = log {
            log.record(StockLogEntry::added(name, qty, Utc::now()));
        }
        Ok(())
    }

    /// Subtract `qty` from `item`, deleting the entry once it reaches zero or below.
    ///
    /// The new quantity is computed before anything is written, so a failed or
    /// depleting removal never leaves a negative quantity behind.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> StockResult<Removal> {
        let current = *self
            .quantities
            .get(item)
            .ok_or_else(|| StockError::not_found(item))?;

        let remaining = current.checked_sub(qty).ok_or_else(|| {
            StockError::invalid_quantity(format!("removing {qty} from {current} of '{item}' overflows"))
        })?;

        if remaining <= 0 {
            self.delete(item);
            tracing::debug!(item, qty, "stock depleted, entry removed");
            Ok(Removal::Depleted)
        } else {
            self.set(item, remaining);
            tracing::debug!(item, qty, quantity = remaining, "stock removed");
            Ok(Removal::Remaining(remaining))
        }
    }

    /// Current quantity of `item`, or 0 when it is not tracked.
    pub fn get_qty(&self, item: &str) -> i64 {
        self.quantities.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.iter()
            .filter(|(_, quantity)| *quantity < threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(item, quantity)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.order
            .iter()
            .map(|item| (item.as_str(), self.get_qty(item)))
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
        self.order.clear();
    }

    /// Overwrite the quantity of `item`, appending it to the order if new.
    pub(crate) fn set(&mut self, item: &str, quantity: i64) {
        match self.quantities.get_mut(item) {
            Some(existing) => *existing = quantity,
            None => {
                self.quantities.insert(item.to_string(), quantity);
                self.order.push(item.to_string());
            }
        }
    }

    fn delete(&mut self, item: &str) {
        if self.quantities.remove(item).is_some() {
            self.order.retain(|key| key != item);
        }
    }
}

impl FromIterator<(String, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        let mut inventory = Self::new();
        inventory.extend(iter);
        inventory
    }
}

impl Extend<(String, i64)> for Inventory {
    fn extend<T: IntoIterator<Item = (String, i64)>>(&mut self, iter: T) {
        for (item, quantity) in iter {
            self.set(&item, quantity);
        }
    }
}
