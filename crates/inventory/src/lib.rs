//! Single-location inventory store.
//!
//! An [`Inventory`] owns the item → quantity mapping. Callers hold it and pass
//! it to every operation; nothing here is process-global. Persistence is a
//! flat JSON object (see [`persist`]) and the console report lives in
//! [`report`].

pub mod log;
pub mod persist;
pub mod report;
pub mod store;

pub use log::{StockLog, StockLogEntry};
pub use persist::{DEFAULT_INVENTORY_FILE, LoadOutcome};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Removal};

pub use stockroom_core::{ItemName, StockError, StockResult};
