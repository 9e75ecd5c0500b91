//! JSON persistence for the inventory.
//!
//! The file is a flat JSON object: keys are item names, values are integer
//! quantities. No envelope, no schema version. Keys are written and read in
//! iteration order.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockroom_core::{ItemName, StockResult};

use crate::store::Inventory;

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// What `load_data` found at the given path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; the inventory now holds `items` entries.
    Loaded { items: usize },
    /// The file does not exist; the inventory was reset to empty.
    Missing,
}

impl Inventory {
    /// Replace the whole inventory with the contents of `path`.
    ///
    /// A missing file is a warning, not an error: the inventory is emptied and
    /// `LoadOutcome::Missing` is returned. Any other failure leaves the current
    /// contents untouched.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> StockResult<LoadOutcome> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "inventory file not found, starting with empty inventory"
                );
                self.clear();
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(e.into()),
        };

        // Read errors surface as `Io` above; only parsing maps to `Json`.
        let loaded: Inventory = serde_json::from_slice(&bytes)?;
        let items = loaded.len();
        *self = loaded;

        tracing::info!(path = %path.display(), items, "inventory loaded");
        Ok(LoadOutcome::Loaded { items })
    }

    /// Write the inventory to `path` as 2-space indented JSON, overwriting it.
    pub fn save_data(&self, path: impl AsRef<Path>) -> StockResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), items = self.len(), "inventory saved");
        Ok(())
    }
}

impl Serialize for Inventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(InventoryVisitor)
    }
}

struct InventoryVisitor;

impl<'de> Visitor<'de> for InventoryVisitor {
    type Value = Inventory;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a JSON object mapping item names to integer quantities")
    }

    // Duplicate keys keep their first position and their last value.
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut inventory = Inventory::new();
        while let Some((item, quantity)) = map.next_entry::<ItemName, i64>()? {
            inventory.set(item.as_str(), quantity);
        }
        Ok(inventory)
    }
}
