//! Subcommand handlers: load the ledger, run one operation, print, save.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use stockledger_core::Quantity;
use stockledger_inventory::{
    ActivityLog, Ledger, LedgerConfig, PersistenceError, REPORT_FOOTER, REPORT_HEADER,
};

use crate::cli::Command;

pub fn run(command: Command, config: &LedgerConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let path = config.data_file.as_path();
    match command {
        Command::Add { item, quantity } => {
            let mut ledger = open(path)?;
            let mut log = ActivityLog::new();
            ledger.add(&item, quantity.value(), &mut log)?;
            for line in &log {
                writeln!(out, "{line}")?;
            }
            persist(&ledger, path)
        }
        Command::Remove { item, quantity } => {
            let mut ledger = open(path)?;
            if ledger.remove(&item, quantity.value()) {
                writeln!(out, "Removed {quantity} of {item}")?;
                persist(&ledger, path)
            } else {
                writeln!(out, "{item} is not in stock")?;
                Ok(())
            }
        }
        Command::Qty { item } => {
            let ledger = open(path)?;
            writeln!(out, "{item}: {}", ledger.quantity_of(&item))?;
            Ok(())
        }
        Command::Low { threshold } => {
            let ledger = open(path)?;
            let threshold = threshold.unwrap_or(config.low_stock_threshold);
            for item in ledger.low_stock(threshold) {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
        Command::Report => {
            let ledger = open(path)?;
            print_report(&ledger, out)
        }
        Command::Demo => demo(path, out),
    }
}

/// Load the ledger at `path`; a missing file means an empty ledger.
fn open(path: &Path) -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::new();
    match ledger.try_load(path) {
        Ok(()) | Err(PersistenceError::NotFound { .. }) => Ok(ledger),
        Err(err) => Err(err.into()),
    }
}

fn persist(ledger: &Ledger, path: &Path) -> anyhow::Result<()> {
    ledger
        .try_save(path)
        .with_context(|| format!("failed to save {}", path.display()))
}

fn print_report(ledger: &Ledger, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "{REPORT_HEADER}")?;
    writeln!(out, "{}", ledger.format_report())?;
    if !ledger.is_empty() {
        writeln!(out, "{REPORT_FOOTER}")?;
        writeln!(out)?;
    }
    Ok(())
}

fn demo(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let mut ledger = Ledger::new();
    let mut log = ActivityLog::new();

    ledger.add("apple", 10.0, &mut log)?;
    ledger.add("banana", 5.0, &mut log)?;

    match "ten".parse::<Quantity>() {
        Ok(quantity) => ledger.add("123", quantity.value(), &mut log)?,
        Err(err) => writeln!(out, "Caught expected error: {err}")?,
    }

    ledger.remove("apple", 3.0);
    ledger.remove("orange", 1.0);

    writeln!(out, "Apple stock: {}", ledger.quantity_of("apple"))?;
    writeln!(out, "Low items: {:?}", ledger.low_stock(8.0))?;

    writeln!(out)?;
    writeln!(out, "=== Activity Log ===")?;
    for line in &log {
        writeln!(out, "{line}")?;
    }

    if !ledger.save(path) {
        bail!("failed to save {}", path.display());
    }
    if !ledger.load(path) {
        bail!("failed to reload {}", path.display());
    }
    print_report(&ledger, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> LedgerConfig {
        LedgerConfig {
            data_file: dir.path().join("inventory.json"),
            ..LedgerConfig::default()
        }
    }

    fn run_to_string(command: Command, config: &LedgerConfig) -> String {
        let mut out = Vec::new();
        run(command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_query_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let added = run_to_string(
            Command::Add {
                item: "apple".into(),
                quantity: Quantity::from(10),
            },
            &config,
        );
        assert!(added.trim_end().ends_with("Added 10 of apple"));

        run_to_string(
            Command::Remove {
                item: "apple".into(),
                quantity: Quantity::from(3),
            },
            &config,
        );

        let qty = run_to_string(Command::Qty { item: "apple".into() }, &config);
        assert_eq!(qty, "apple: 7\n");
    }

    #[test]
    fn removing_unknown_item_reports_and_keeps_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let out = run_to_string(
            Command::Remove {
                item: "orange".into(),
                quantity: Quantity::from(1),
            },
            &config,
        );

        assert_eq!(out, "orange is not in stock\n");
        assert!(!config.data_file.exists());
    }

    #[test]
    fn low_uses_configured_threshold_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = LedgerConfig {
            low_stock_threshold: 8.0,
            ..config_in(&dir)
        };
        std::fs::write(&config.data_file, "{\"apple\": 7, \"banana\": 5, \"cherry\": 9}").unwrap();

        let out = run_to_string(Command::Low { threshold: None }, &config);
        assert_eq!(out, "apple\nbanana\n");

        let out = run_to_string(Command::Low { threshold: Some(6.0) }, &config);
        assert_eq!(out, "banana\n");
    }

    #[test]
    fn report_on_empty_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_to_string(Command::Report, &config_in(&dir));
        assert_eq!(out, "\n=== Inventory Report ===\nNo items in inventory\n");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        std::fs::write(&config.data_file, "{oops").unwrap();

        let mut out = Vec::new();
        assert!(run(Command::Report, &config, &mut out).is_err());
    }

    #[test]
    fn demo_walkthrough_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_to_string(Command::Demo, &config_in(&dir));

        assert!(out.contains("Caught expected error: invalid argument: Quantity must be a number"));
        assert!(out.contains("Apple stock: 7\n"));
        assert!(out.contains("Low items: [\"apple\", \"banana\"]\n"));
        assert!(out.contains("=== Inventory Report ===\napple -> 7\nbanana -> 5\n"));
    }
}
