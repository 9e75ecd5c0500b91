//! `stockroom-core` — shared building blocks for the inventory store.
//!
//! This crate contains **pure** primitives (no IO beyond the error types that
//! wrap it).

pub mod error;
pub mod item_name;

pub use error::{StockError, StockResult};
pub use item_name::ItemName;
