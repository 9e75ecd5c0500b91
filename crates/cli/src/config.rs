//! Runtime configuration, read from the environment.

use std::path::PathBuf;

use stockroom_inventory::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

pub const FILE_ENV: &str = "STOCKROOM_FILE";
pub const THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Inventory file used for save and reload.
    pub file: PathBuf,
    /// Quantity below which an item is reported as low stock.
    pub low_stock_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = lookup(FILE_ENV).filter(|f| !f.trim().is_empty()) {
            config.file = PathBuf::from(file);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{THRESHOLD_ENV} is not an integer; using default {DEFAULT_LOW_STOCK_THRESHOLD}"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.file, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn reads_file_and_threshold() {
        let config = Config::from_lookup(lookup_from(&[
            (FILE_ENV, "/tmp/stock.json"),
            (THRESHOLD_ENV, " 12 "),
        ]));
        assert_eq!(config.file, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold, 12);
    }

    #[test]
    fn bad_threshold_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[(THRESHOLD_ENV, "lots")]));
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
