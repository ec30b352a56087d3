//! Plain-text rendering of the ledger.

use crate::ledger::Ledger;

pub const REPORT_HEADER: &str = "=== Inventory Report ===";
pub const REPORT_FOOTER: &str = "=======================";
pub const EMPTY_REPORT: &str = "No items in inventory";

impl Ledger {
    /// One `"<item> -> <quantity>"` line per entry, in ledger order.
    pub fn format_report(&self) -> String {
        if self.is_empty() {
            return EMPTY_REPORT.to_string();
        }

        self.iter()
            .map(|(item, qty)| format!("{item} -> {qty}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
