//! Error model for inventory operations.

use thiserror::Error;

/// Result type used across the inventory crates.
pub type StockResult<T> = Result<T, StockError>;

/// Inventory-level error.
///
/// `NotFound`, `InvalidItemName` and `InvalidQuantity` are recoverable: the operation left the
/// inventory untouched and the caller decides how to surface the warning.
/// `Io` and `Json` come from persistence and are usually fatal for the caller.
#[derive(Debug, Error)]
pub enum StockError {
    /// The item is not tracked by the inventory.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// The item name is not usable as an inventory key.
    #[error("invalid item name: {0}")]
    InvalidItemName(String),

    /// The quantity cannot be applied (e.g. it would overflow the stock level).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Reading or writing the inventory file failed.
    #[error("inventory file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The inventory file is not a JSON object of integer quantities.
    #[error("malformed inventory data: {0}")]
    Json(#[from] serde_json::Error),
}

impl StockError {
    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn invalid_item_name(msg: impl Into<String>) -> Self {
        Self::InvalidItemName(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    /// Whether the error is a recoverable warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::InvalidItemName(_) | Self::InvalidQuantity(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_quantity_errors_are_warnings() {
        assert!(StockError::not_found("orange").is_warning());
        assert!(StockError::invalid_quantity("overflow").is_warning());
    }

    #[test]
    fn io_errors_are_not_warnings() {
        let err: StockError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!err.is_warning());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn not_found_message_names_the_item() {
        let err = StockError::not_found("orange");
        assert_eq!(err.to_string(), "item 'orange' not found in inventory");
    }
}
