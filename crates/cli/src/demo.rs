//! Fixed demonstration sequence over a fresh inventory.

use std::io::Write;

use anyhow::Context;

use stockroom_inventory::{Inventory, LoadOutcome, StockError, StockLogEntry, StockResult};

use crate::config::Config;

/// Run the demo, writing console lines to `out`.
///
/// Recoverable conditions (unknown item, missing file) are printed as
/// `Warning:` lines and the sequence carries on. Persistence failures abort.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::new();
    let mut log: Vec<StockLogEntry> = Vec::new();

    inventory.add_item("apple", 10, Some(&mut log))?;
    inventory.add_item("banana", 3, Some(&mut log))?;
    warn_on_failure(out, inventory.remove_item("apple", 3))?;
    warn_on_failure(out, inventory.remove_item("orange", 1))?;

    writeln!(out, "Apple stock: {}", inventory.get_qty("apple"))?;
    writeln!(
        out,
        "Low items: {:?}",
        inventory.check_low_items(config.low_stock_threshold)
    )?;

    inventory
        .save_data(&config.file)
        .with_context(|| format!("failed to save inventory to {}", config.file.display()))?;

    let outcome = inventory
        .load_data(&config.file)
        .with_context(|| format!("failed to load inventory from {}", config.file.display()))?;
    if outcome == LoadOutcome::Missing {
        writeln!(
            out,
            "Warning: File '{}' not found, starting with empty inventory",
            config.file.display()
        )?;
    }

    inventory.write_report(out)?;

    for entry in &log {
        tracing::debug!(%entry, "stock log");
    }

    Ok(inventory)
}

/// Print recoverable stock errors as warnings; propagate anything else.
fn warn_on_failure<W: Write, T>(out: &mut W, result: StockResult<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.is_warning() => {
            tracing::warn!(error = %e, "stock operation skipped");
            match &e {
                StockError::NotFound(item) => {
                    writeln!(out, "Warning: Item '{item}' not found in inventory")?
                }
                other => writeln!(out, "Warning: {other}")?,
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
