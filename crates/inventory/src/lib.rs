//! Stock ledger domain module.
//!
//! An explicit, caller-owned map from item name to quantity with add/remove
//! operations, low-stock queries, whole-file JSON persistence and a plain-text
//! report. Presentation (console output) lives in the CLI crate.

pub mod activity_log;
pub mod config;
pub mod ledger;
pub mod persistence;
pub mod report;

pub use activity_log::{ActivityLog, TIMESTAMP_FORMAT};
pub use config::{DEFAULT_DATA_FILE, LedgerConfig};
pub use ledger::{DEFAULT_LOW_STOCK_THRESHOLD, Ledger};
pub use persistence::PersistenceError;
pub use report::{EMPTY_REPORT, REPORT_FOOTER, REPORT_HEADER};
