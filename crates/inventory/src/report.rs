//! Console report of the current inventory.

use std::io::{self, Write};

use crate::store::Inventory;

const REPORT_HEADER: &str = "Items Report";

impl Inventory {
    /// Write the header and one `item -> quantity` line per entry, in order.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (item, quantity) in self.iter() {
            writeln!(out, "{item} -> {quantity}")?;
        }
        Ok(())
    }

    /// Write the report to standard output.
    pub fn print_data(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)?;
        out.flush()
    }
}
